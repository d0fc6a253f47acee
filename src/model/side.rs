//! Editor side

/// One of the two compared texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Side {
    /// Sequence A, the original text
    #[default]
    Left,
    /// Sequence B, the modified text
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Pane title
    pub fn label(&self) -> &'static str {
        match self {
            Self::Left => "Original",
            Self::Right => "Modified",
        }
    }

    /// The opposite side
    pub fn other(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
