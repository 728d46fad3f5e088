//! URL parameter helpers and types.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use engine::ListingLocation;
use serde::{Deserialize, Serialize};

/// Raw query parameter value, percent-encoded on the way out.
///
/// Parsing never fails: a listing page must still open when someone hands
/// it a mangled link. Whether the value makes sense is decided later, by the
/// facet codec, which falls back to the page default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam(pub String);

impl From<String> for UrlParam {
    fn from(value: String) -> Self {
        UrlParam(value)
    }
}

impl From<Option<String>> for UrlParam {
    fn from(value: Option<String>) -> Self {
        UrlParam(value.unwrap_or_default())
    }
}

impl UrlParam {
    pub fn value(&self) -> Option<String> {
        Some(self.0.clone()).filter(|v| !v.trim().is_empty())
    }
}

impl Display for UrlParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", urlencoding::encode(&self.0))
    }
}

impl FromStr for UrlParam {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = urlencoding::decode(s).map(|d| d.into_owned()).unwrap_or_else(|_| s.to_string());
        Ok(UrlParam(decoded))
    }
}

/// Location of a listing page as its route carries it.
pub fn listing_location(input: &UrlParam, mode: &UrlParam) -> ListingLocation {
    ListingLocation::new(input.value(), mode.value())
}
