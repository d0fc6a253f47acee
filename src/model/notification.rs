//! Toasts
//!
//! Short-lived feedback for editor actions (copy, paste, normalize, ...).

use std::time::{Duration, Instant};

/// Default lifetime of a notification
pub const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// Severity of a toast, picks its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Success - action completed (green)
    Success,
    /// Info - nothing happened, no harm done (cyan)
    Info,
    /// Error - action refused or failed (red)
    Error,
}

impl NotificationKind {
    /// Title bar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success:",
            Self::Info => "Info:",
            Self::Error => "Error:",
        }
    }
}

/// Transient message shown in the header
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Start of the visible period
    pub created_at: Instant,
    /// How long the notification stays visible
    pub ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    /// Override the lifetime
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Check expiry against an explicit clock reading
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_ttl() {
        let n = Notification::new("Copied to clipboard", NotificationKind::Success);
        assert_eq!(n.message, "Copied to clipboard");
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.ttl, DEFAULT_TTL);
    }

    #[test]
    fn test_notification_constructors() {
        assert_eq!(Notification::success("ok").kind, NotificationKind::Success);
        assert_eq!(Notification::info("fyi").kind, NotificationKind::Info);
        assert_eq!(Notification::error("no").kind, NotificationKind::Error);
    }

    #[test]
    fn test_fresh_toast_is_visible() {
        let n = Notification::success("Editor cleared");
        assert!(!n.is_expired());
    }

    #[test]
    fn test_notification_expires_after_ttl() {
        let n = Notification::info("Already empty").with_ttl(Duration::from_millis(50));
        assert!(!n.is_expired_at(n.created_at + Duration::from_millis(49)));
        assert!(n.is_expired_at(n.created_at + Duration::from_millis(50)));
    }

    #[test]
    fn test_notification_kind_labels() {
        assert_eq!(NotificationKind::Success.label(), "Success:");
        assert_eq!(NotificationKind::Error.label(), "Error:");
    }
}
