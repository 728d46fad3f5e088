//! Like / follow toggles.
//!
//! Toggles are never applied to local state. The coordinator checks the
//! viewer, runs the mutation, and on success hands control back to the page
//! (normally [`crate::QueryEngine::refetch`]) so the flags come from the server.

use std::{future::Future, rc::Rc};

use common::member::Actor;

use crate::{
    error::{ListingError, RemoteError},
    notify::{Notification, NotificationSink},
    session::SessionView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    LikeProperty,
    LikeArticle,
    LikeMember,
    Subscribe,
    Unsubscribe,
}

impl ToggleKind {
    /// Resource and action path segments of the mutation endpoint.
    pub fn endpoint(self) -> (&'static str, &'static str) {
        match self {
            Self::LikeProperty => ("property", "like"),
            Self::LikeArticle => ("article", "like"),
            Self::LikeMember => ("member", "like"),
            Self::Subscribe => ("member", "subscribe"),
            Self::Unsubscribe => ("member", "unsubscribe"),
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::LikeProperty | Self::LikeArticle | Self::LikeMember => "Updated.",
            Self::Subscribe => "Subscribed.",
            Self::Unsubscribe => "Unsubscribed.",
        }
    }

    /// Shown when the server gives no message of its own.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::LikeProperty | Self::LikeArticle | Self::LikeMember => "Could not update like.",
            Self::Subscribe => "Could not subscribe.",
            Self::Unsubscribe => "Could not unsubscribe.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// No viewer or no target; nothing was sent.
    Rejected,
    Applied,
    Failed(ListingError),
}

#[derive(Clone)]
pub struct ToggleCoordinator {
    session: SessionView,
    sink: Rc<dyn NotificationSink>,
}

impl ToggleCoordinator {
    pub fn new(session: SessionView, sink: Rc<dyn NotificationSink>) -> Self {
        Self { session, sink }
    }

    /// Runs one toggle.
    ///
    /// `mutation` receives the viewer and the target id and is called at most
    /// once. `on_done` runs exactly once after a successful mutation and never
    /// otherwise.
    pub async fn toggle<T, Fut>(
        &self,
        kind: ToggleKind,
        target_id: &str,
        mutation: impl FnOnce(Actor, String) -> Fut,
        on_done: impl FnOnce(),
    ) -> ToggleOutcome
    where
        Fut: Future<Output = Result<T, RemoteError>>,
    {
        let viewer = self.session.current().filter(Actor::has_identity);
        let (Some(viewer), false) = (viewer, target_id.trim().is_empty()) else {
            tracing::info!("toggle {kind:?}: rejected, no viewer or target");
            self.sink.notify(Notification::failure(&ListingError::NotAuthenticated));
            return ToggleOutcome::Rejected;
        };

        match mutation(viewer, target_id.to_string()).await {
            Ok(_) => {
                tracing::debug!("toggle {kind:?} on {target_id}: applied");
                on_done();
                self.sink.notify(Notification::success(kind.success_message()));
                ToggleOutcome::Applied
            }
            Err(err) => {
                tracing::warn!("toggle {kind:?} on {target_id}: {err}");
                let error = ListingError::MutationFailed { message: err.describe(kind.failure_message()) };
                self.sink.notify(Notification::failure(&error));
                ToggleOutcome::Failed(error)
            }
        }
    }
}
