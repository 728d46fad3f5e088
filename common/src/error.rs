//! Error classification shared by every listing surface.

use serde::{Deserialize, Serialize};

/// The four classes every listing failure is sorted into before it reaches
/// the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Local precondition failed, nothing was sent.
    NotAuthenticated,
    /// URL inquiry parameter did not decode; the page default is used.
    MalformedUrlState,
    /// Remote list query failed.
    ListFetchFailed,
    /// Remote like/follow mutation failed.
    MutationFailed,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::MalformedUrlState => "MALFORMED_URL_STATE",
            Self::ListFetchFailed => "LIST_FETCH_FAILED",
            Self::MutationFailed => "MUTATION_FAILED",
        }
    }

    /// Whether the class may be shown to the user at all.
    pub fn is_user_visible(self) -> bool {
        !matches!(self, Self::MalformedUrlState)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
