//! Dealer/agent listing facets.

use serde::{Deserialize, Serialize};

use super::{FacetSet, NoFacet, Range, normalize_list, normalize_text, overlay_field};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AgentFacets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentList {
    Location,
}

impl FacetSet for AgentFacets {
    type List = AgentList;
    type Range = NoFacet;
    type Mode = NoFacet;

    fn list_mut(&mut self, facet: AgentList) -> &mut Option<Vec<String>> {
        match facet {
            AgentList::Location => &mut self.location_list,
        }
    }

    fn list(&self, facet: AgentList) -> &[String] {
        match facet {
            AgentList::Location => self.location_list.as_deref().unwrap_or_default(),
        }
    }

    fn range_mut(&mut self, facet: NoFacet) -> &mut Option<Range> {
        match facet {}
    }

    fn range(&self, facet: NoFacet) -> Option<Range> {
        match facet {}
    }

    fn text_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.text)
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn apply_mode(&mut self, mode: NoFacet) {
        match mode {}
    }

    fn overlay(&mut self, patch: Self) {
        overlay_field(&mut self.location_list, patch.location_list);
        overlay_field(&mut self.text, patch.text);
    }

    fn normalize(&mut self) {
        normalize_list(&mut self.location_list);
        normalize_text(&mut self.text);
    }
}
