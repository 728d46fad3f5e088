pub mod error_boundary;
pub mod listing_components;
pub mod navbar;
