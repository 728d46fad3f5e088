//! Facets of the signed-in member's own listings.

use serde::{Deserialize, Serialize};

use super::{FacetSet, ListingMode, NoFacet, Range, overlay_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    Active,
    Sold,
    Delete,
}

impl ListingMode for PropertyStatus {
    fn as_param(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Sold => "SOLD",
            Self::Delete => "DELETE",
        }
    }

    fn from_param(param: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_param().eq_ignore_ascii_case(param.trim()))
    }

    fn all() -> &'static [Self] {
        &[Self::Active, Self::Sold, Self::Delete]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Active => "On Sale",
            Self::Sold => "Sold",
            Self::Delete => "Deleted",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MyPropertyFacets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_status: Option<PropertyStatus>,
}

impl FacetSet for MyPropertyFacets {
    type List = NoFacet;
    type Range = NoFacet;
    type Mode = PropertyStatus;

    fn list_mut(&mut self, facet: NoFacet) -> &mut Option<Vec<String>> {
        match facet {}
    }

    fn list(&self, facet: NoFacet) -> &[String] {
        match facet {}
    }

    fn range_mut(&mut self, facet: NoFacet) -> &mut Option<Range> {
        match facet {}
    }

    fn range(&self, facet: NoFacet) -> Option<Range> {
        match facet {}
    }

    fn mode(&self) -> Option<PropertyStatus> {
        self.property_status
    }

    fn apply_mode(&mut self, mode: PropertyStatus) {
        self.property_status = Some(mode);
    }

    fn overlay(&mut self, patch: Self) {
        overlay_field(&mut self.property_status, patch.property_status);
    }

    fn normalize(&mut self) {}
}
