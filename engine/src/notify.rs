//! User-facing notifications, fire-and-forget.

use common::error::ErrorKind;

use crate::error::ListingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure(ErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn failure(error: &ListingError) -> Self {
        Self { kind: NotificationKind::Failure(error.kind()), message: error.user_message() }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self.kind {
            NotificationKind::Success => None,
            NotificationKind::Failure(kind) => Some(kind),
        }
    }

    /// Malformed URL state is logged, never put in front of the user.
    pub fn is_user_visible(&self) -> bool {
        self.error_kind().is_none_or(ErrorKind::is_user_visible)
    }
}

pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

impl<F: Fn(Notification)> NotificationSink for F {
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;

    #[test]
    fn success_and_remote_failures_are_shown() {
        assert!(Notification::success("Updated.").is_user_visible());
        let failed = ListingError::ListFetchFailed(RemoteError::transport("offline"));
        assert!(Notification::failure(&failed).is_user_visible());
        assert!(Notification::failure(&ListingError::NotAuthenticated).is_user_visible());
    }

    #[test]
    fn malformed_url_state_stays_in_the_log() {
        let notification = Notification {
            kind: NotificationKind::Failure(ErrorKind::MalformedUrlState),
            message: "bad input param".into(),
        };
        assert!(!notification.is_user_visible());
    }
}
