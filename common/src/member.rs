//! The signed-in viewer as the rest of the app sees it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    #[serde(rename = "_id")]
    pub id: String,
    pub member_nick: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Actor {
    /// An actor with a blank id carries no identity.
    pub fn has_identity(&self) -> bool {
        !self.id.trim().is_empty()
    }
}
