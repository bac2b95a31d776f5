//! Toast notification types

use crate::core::auth_flow::AuthMode;

/// Notification type for toast display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
}

/// Notification shown in the toast stack
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(4000),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(4000),
        }
    }

    /// Toast carrying the placeholder acknowledgment of an auth form submission
    pub fn acknowledgment(mode: AuthMode, message: impl Into<String>) -> Self {
        match mode {
            AuthMode::Login => Self::success("Signed in", message),
            AuthMode::Register => Self::success("Account created", message),
            AuthMode::Forgot => Self::info("Check your inbox", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledgment_keeps_message() {
        let n = Notification::acknowledgment(AuthMode::Forgot, "Password reset link sent to a@b.c");
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.message, "Password reset link sent to a@b.c");
        assert!(n.auto_dismiss_ms.is_some());
    }

    #[test]
    fn test_acknowledgment_titles() {
        assert_eq!(Notification::acknowledgment(AuthMode::Login, "").title, "Signed in");
        assert_eq!(
            Notification::acknowledgment(AuthMode::Register, "").kind,
            NotificationKind::Success
        );
    }
}
