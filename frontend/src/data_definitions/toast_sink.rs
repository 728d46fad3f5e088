use std::time::Duration;

use dioxus::logger::tracing;
use dioxus_primitives::toast::{ToastOptions, Toasts};
use engine::{Notification, NotificationKind, NotificationSink};

/// Shows engine notifications as toasts.
pub struct ToastSink {
    toasts: Toasts,
}

impl ToastSink {
    pub fn new(toasts: Toasts) -> Self {
        Self { toasts }
    }
}

impl NotificationSink for ToastSink {
    fn notify(&self, notification: Notification) {
        let options = ToastOptions::new().duration(Duration::from_secs(5)).permanent(false);
        match notification.kind {
            NotificationKind::Success => {
                self.toasts.success(notification.message, options);
            }
            NotificationKind::Failure(kind) if notification.is_user_visible() => {
                tracing::info!("notify {kind}: {}", notification.message);
                self.toasts.error(notification.message, options);
            }
            NotificationKind::Failure(kind) => {
                tracing::warn!("not shown to the user, {kind}: {}", notification.message);
            }
        }
    }
}
