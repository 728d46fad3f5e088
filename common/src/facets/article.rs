//! Community article facets.

use serde::{Deserialize, Serialize};

use super::{FacetSet, ListingMode, NoFacet, Range, normalize_text, overlay_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleCategory {
    Free,
    Recommend,
    News,
    Humor,
}

impl ListingMode for ArticleCategory {
    fn as_param(self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Recommend => "RECOMMEND",
            Self::News => "NEWS",
            Self::Humor => "HUMOR",
        }
    }

    fn from_param(param: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_param().eq_ignore_ascii_case(param.trim()))
    }

    fn all() -> &'static [Self] {
        &[Self::Free, Self::Recommend, Self::News, Self::Humor]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Free => "Free Board",
            Self::Recommend => "Recommendation",
            Self::News => "News",
            Self::Humor => "Humor",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArticleFacets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_category: Option<ArticleCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl FacetSet for ArticleFacets {
    type List = NoFacet;
    type Range = NoFacet;
    type Mode = ArticleCategory;

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

    fn text_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.text)
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn mode(&self) -> Option<ArticleCategory> {
        self.article_category
    }

    fn apply_mode(&mut self, mode: ArticleCategory) {
        self.article_category = Some(mode);
    }

    fn overlay(&mut self, patch: Self) {
        overlay_field(&mut self.article_category, patch.article_category);
        overlay_field(&mut self.text, patch.text);
    }

    fn normalize(&mut self) {
        normalize_text(&mut self.text);
    }
}
