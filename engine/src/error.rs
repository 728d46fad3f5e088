//! Remote failures and their classification.

use common::error::ErrorKind;
use thiserror::Error;

/// A failed remote call. Either message may be missing; see [`RemoteError::describe`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", render(.server_message, .transport_message, .status))]
pub struct RemoteError {
    /// Message the server put in its error body.
    pub server_message: Option<String>,
    /// Message from the transport layer (connection refused, bad status, undecodable body).
    pub transport_message: Option<String>,
    pub status: Option<u16>,
}

impl RemoteError {
    pub fn server(message: impl Into<String>) -> Self {
        Self { server_message: Some(message.into()), ..Self::default() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self { transport_message: Some(message.into()), ..Self::default() }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_transport_message(mut self, message: impl Into<String>) -> Self {
        self.transport_message = Some(message.into());
        self
    }

    /// Most specific message available: server, then transport, then `generic`.
    pub fn describe(&self, generic: &str) -> String {
        most_specific(&self.server_message, &self.transport_message)
            .unwrap_or(generic)
            .to_string()
    }
}

fn most_specific<'a>(server: &'a Option<String>, transport: &'a Option<String>) -> Option<&'a str> {
    [server, transport]
        .into_iter()
        .flatten()
        .map(|m| m.trim())
        .find(|m| !m.is_empty())
}

fn render(server: &Option<String>, transport: &Option<String>, status: &Option<u16>) -> String {
    let message = most_specific(server, transport).unwrap_or("request failed");
    match status {
        Some(status) => format!("{message} (status {status})"),
        None => message.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("Please sign in first.")]
    NotAuthenticated,

    #[error("Failed to load the list: {0}")]
    ListFetchFailed(RemoteError),

    #[error("{message}")]
    MutationFailed { message: String },
}

impl ListingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAuthenticated => ErrorKind::NotAuthenticated,
            Self::ListFetchFailed(_) => ErrorKind::ListFetchFailed,
            Self::MutationFailed { .. } => ErrorKind::MutationFailed,
        }
    }

    /// Text safe to put in front of the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::ListFetchFailed(remote) => remote.describe("Failed to load the list."),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_prefers_server_then_transport_then_generic() {
        let both = RemoteError::server("Already liked").with_transport_message("HTTP 400");
        assert_eq!(both.describe("failed"), "Already liked");

        let transport = RemoteError::transport("connection refused");
        assert_eq!(transport.describe("failed"), "connection refused");

        let blank_server = RemoteError::server("   ").with_transport_message("HTTP 502");
        assert_eq!(blank_server.describe("failed"), "HTTP 502");

        assert_eq!(RemoteError::default().describe("failed"), "failed");
    }

    #[test]
    fn display_includes_status() {
        let err = RemoteError::server("no such listing").with_status(404);
        assert_eq!(err.to_string(), "no such listing (status 404)");
        assert_eq!(RemoteError::default().to_string(), "request failed");
    }

    #[test]
    fn listing_errors_classify() {
        assert_eq!(ListingError::NotAuthenticated.kind(), ErrorKind::NotAuthenticated);
        let fetch = ListingError::ListFetchFailed(RemoteError::transport("offline"));
        assert_eq!(fetch.kind(), ErrorKind::ListFetchFailed);
        assert_eq!(fetch.user_message(), "offline");
        let mutation = ListingError::MutationFailed { message: "nope".into() };
        assert_eq!(mutation.kind(), ErrorKind::MutationFailed);
        assert_eq!(mutation.user_message(), "nope");
    }
}
