//! Listing page constants shared by the engine and the frontend.

/// Vehicle listings grid: three rows of three cards.
pub const PROPERTY_PAGE_SIZE: u32 = 9;
pub const AGENT_PAGE_SIZE: u32 = 10;
pub const ARTICLE_PAGE_SIZE: u32 = 6;
pub const MY_PROPERTY_PAGE_SIZE: u32 = 5;
pub const FAVORITE_PAGE_SIZE: u32 = 6;

pub const DEFAULT_SORT: &str = "createdAt";

/// Quiet period before typed search text reaches the inquiry.
pub const TEXT_DEBOUNCE_MS: u64 = 300;
