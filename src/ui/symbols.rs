//! UI symbols (markers, separators)

/// Header and pane markers
pub mod markers {
    /// Shown in the header while a recomputation is scheduled
    pub const PENDING: char = '●';
    /// Prefix of the focused pane title
    pub const FOCUSED: char = '▶';
    /// Separator between stats in pane footers
    pub const SEPARATOR: &str = " | ";
}
