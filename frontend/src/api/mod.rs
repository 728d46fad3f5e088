//! Clients for the remote marketplace API.

pub mod http;
pub mod list_service;
pub mod toggle_api;

/// List resources, as in `POST {base}/{resource}/list`.
pub mod resources {
    pub const PROPERTIES: &str = "property";
    pub const AGENTS: &str = "member/agents";
    pub const ARTICLES: &str = "article";
    pub const MY_PROPERTIES: &str = "property/mine";
    pub const FAVORITES: &str = "property/favorites";
}
