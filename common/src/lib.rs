//! Common library exports shared between the listing engine and the frontend.

extern crate serde;


pub mod error;
pub mod facets;
pub mod inquiry;
pub mod inquiry_codec;
pub mod listing_const;
pub mod listing_items;
pub mod member;
