//! Facet codec: inquiry <-> URL parameter, and the merge rule every facet
//! mutation goes through.
//!
//! The one rule that matters: a change to the facets (or the sort) means the
//! result set changed, so the page goes back to 1. Only an explicit page
//! change keeps the facets and moves the page.

use thiserror::Error;

use crate::{
    error::ErrorKind,
    facets::FacetSet,
    inquiry::{Direction, Inquiry},
};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("inquiry parameter is not valid JSON for this listing: {0}")]
    Json(#[from] serde_json::Error),

    #[error("inquiry parameter is out of shape: {0}")]
    Shape(&'static str),
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::MalformedUrlState
    }
}

/// A partial update to an inquiry.
#[derive(Debug, Clone, PartialEq)]
pub enum InquiryPatch<F> {
    /// Facets set here replace the ones in the base; page resets to 1.
    Search(F),
    /// Moves to another page; facets and sort stay untouched.
    Page(u32),
    /// New ordering; page resets to 1.
    Sort { sort: String, direction: Direction },
}

/// Deterministic JSON form of the inquiry.
pub fn encode<F: FacetSet>(inquiry: &Inquiry<F>) -> String {
    match serde_json::to_string(inquiry) {
        Ok(json) => json,
        Err(err) => {
            // Only reachable with a broken Serialize impl; an empty parameter
            // decodes back to the page default.
            tracing::error!("encode: failed to serialize inquiry: {err}");
            String::new()
        }
    }
}

/// Strict decode, for callers that want to know why a parameter was rejected.
pub fn try_decode<F: FacetSet>(param: &str) -> Result<Inquiry<F>, CodecError> {
    let inquiry: Inquiry<F> = serde_json::from_str(param)?;
    if inquiry.page < 1 {
        return Err(CodecError::Shape("page must be at least 1"));
    }
    if inquiry.limit == 0 {
        return Err(CodecError::Shape("limit must be positive"));
    }
    if inquiry.sort.is_empty() {
        return Err(CodecError::Shape("sort must name a field"));
    }
    Ok(inquiry)
}

/// Decodes the URL parameter, falling back to `default` when it is missing,
/// blank or malformed. Never fails.
pub fn decode<F: FacetSet>(param: Option<&str>, default: &Inquiry<F>) -> Inquiry<F> {
    let Some(param) = param.map(str::trim).filter(|p| !p.is_empty()) else {
        return default.clone();
    };
    match try_decode(param) {
        Ok(inquiry) => inquiry,
        Err(err) => {
            tracing::warn!("decode: {} ({}), using page default", err.kind(), err);
            default.clone()
        }
    }
}

/// Applies `patch` to `base`, returning the new inquiry.
pub fn merge<F: FacetSet>(base: &Inquiry<F>, patch: InquiryPatch<F>) -> Inquiry<F> {
    let mut next = base.clone();
    match patch {
        InquiryPatch::Search(facets) => {
            next.search.overlay(facets);
            next.search.normalize();
            next.page = 1;
        }
        InquiryPatch::Page(page) => {
            next.page = page.max(1);
        }
        InquiryPatch::Sort { sort, direction } => {
            next.sort = sort;
            next.direction = direction;
            next.page = 1;
        }
    }
    next
}

#[cfg(test)]
#[path = "inquiry_codec_tests.rs"]
mod inquiry_codec_tests;
