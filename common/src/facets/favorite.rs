//! Favorites have no facets; the list is scoped by the signed-in viewer.

use serde::{Deserialize, Serialize};

use super::{FacetSet, NoFacet, Range};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FavoriteFacets {}

impl FacetSet for FavoriteFacets {
    type List = NoFacet;
    type Range = NoFacet;
    type Mode = NoFacet;

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

    fn apply_mode(&mut self, mode: NoFacet) {
        match mode {}
    }

    fn overlay(&mut self, _patch: Self) {}

    fn normalize(&mut self) {}
}
