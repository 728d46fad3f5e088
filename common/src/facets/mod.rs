//! Facet sets: the typed `search` bag of each listing domain.
//!
//! Every domain exposes the same four facet shapes through [`FacetSet`]:
//! multi-select lists, numeric ranges, a mode (boolean pair or single value
//! that also lives in its own URL parameter) and optional free text. Shapes a
//! domain does not have are keyed by the uninhabited [`NoFacet`].

use std::fmt::Debug;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

mod agent;
mod article;
mod favorite;
mod my_property;
mod property;

pub use agent::{AgentFacets, AgentList};
pub use article::{ArticleCategory, ArticleFacets};
pub use favorite::FavoriteFacets;
pub use my_property::{MyPropertyFacets, PropertyStatus};
pub use property::{PropertyFacets, PropertyList, PropertyRange, SaleMode};

/// Inclusive numeric range. `start <= end` is kept by the UI; nothing here clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// A small fixed set of mutually exclusive listing modes, mirrored into a
/// human-readable URL parameter.
pub trait ListingMode: Copy + Debug + PartialEq + 'static {
    fn as_param(self) -> &'static str;
    fn from_param(param: &str) -> Option<Self>;
    fn all() -> &'static [Self];
    fn label(self) -> &'static str {
        self.as_param()
    }
}

/// Key type for facet shapes a domain does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoFacet {}

impl ListingMode for NoFacet {
    fn as_param(self) -> &'static str {
        match self {}
    }

    fn from_param(_param: &str) -> Option<Self> {
        None
    }

    fn all() -> &'static [Self] {
        &[]
    }
}

pub trait FacetSet:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + 'static
{
    /// Names of the multi-select facets.
    type List: Copy + Debug + PartialEq + 'static;
    /// Names of the range facets.
    type Range: Copy + Debug + PartialEq + 'static;
    type Mode: ListingMode;

    fn list_mut(&mut self, facet: Self::List) -> &mut Option<Vec<String>>;
    fn list(&self, facet: Self::List) -> &[String];

    fn range_mut(&mut self, facet: Self::Range) -> &mut Option<Range>;
    fn range(&self, facet: Self::Range) -> Option<Range>;

    /// `None` when the domain has no free-text facet.
    fn text_mut(&mut self) -> Option<&mut Option<String>> {
        None
    }
    fn text(&self) -> Option<&str> {
        None
    }

    /// Mode currently encoded in the facets, if exactly one is selected.
    fn mode(&self) -> Option<Self::Mode> {
        None
    }
    /// Writes every facet field the mode controls in one step.
    fn apply_mode(&mut self, mode: Self::Mode);

    /// Shallow merge: every facet set in `patch` replaces the one in `self`.
    fn overlay(&mut self, patch: Self);

    /// Drops empty lists and blank text so they never reach the remote query.
    fn normalize(&mut self);
}

pub(crate) fn overlay_field<T>(base: &mut Option<T>, patch: Option<T>) {
    if patch.is_some() {
        *base = patch;
    }
}

/// Dedupes keeping first occurrence; an empty selection becomes absent.
pub(crate) fn normalize_list(list: &mut Option<Vec<String>>) {
    if let Some(values) = list.as_mut() {
        let mut seen = Vec::with_capacity(values.len());
        values.retain(|v| {
            if seen.contains(v) {
                false
            } else {
                seen.push(v.clone());
                true
            }
        });
        if values.is_empty() {
            *list = None;
        }
    }
}

pub(crate) fn normalize_text(text: &mut Option<String>) {
    if let Some(value) = text.as_mut() {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            *text = None;
        } else if trimmed.len() != value.len() {
            *value = trimmed.to_string();
        }
    }
}

/// Adds `value` when absent, removes it when present.
pub fn toggle_value(values: &[String], value: &str) -> Vec<String> {
    if values.iter().any(|v| v == value) {
        values.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = values.to_vec();
        next.push(value.to_string());
        next
    }
}
