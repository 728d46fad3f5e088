//! The list request every listing page sends: page, limit, sort and a facet bag.

use serde::{Deserialize, Serialize};

use crate::facets::FacetSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// One list request. `search` only carries facets that constrain the result;
/// unset facets are absent from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Inquiry<F> {
    pub page: u32,
    pub limit: u32,
    pub sort: String,
    pub direction: Direction,
    pub search: F,
}

impl<F: FacetSet> Inquiry<F> {
    /// First page with an empty facet bag.
    pub fn new(limit: u32, sort: impl Into<String>, direction: Direction) -> Self {
        Self {
            page: 1,
            limit,
            sort: sort.into(),
            direction,
            search: F::default(),
        }
    }

    pub fn with_search(mut self, search: F) -> Self {
        self.search = search;
        self
    }

    /// Shape check applied to anything decoded from outside the process.
    pub fn is_well_formed(&self) -> bool {
        self.page >= 1 && self.limit > 0 && !self.sort.is_empty()
    }

    /// Same inquiry with empty facets dropped and text trimmed.
    pub fn normalized(mut self) -> Self {
        self.search.normalize();
        self
    }
}

/// A page of results as returned by the remote list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<E> {
    pub list: Vec<E>,
    pub total_count: u64,
}

impl<E> Default for ListPage<E> {
    fn default() -> Self {
        Self { list: Vec::new(), total_count: 0 }
    }
}

/// `ceil(total_count / limit)`, never below 1 so pagination controls keep a
/// stable shape on empty results.
pub fn page_count(total_count: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 1;
    }
    total_count.div_ceil(u64::from(limit)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::PropertyFacets;

    #[test]
    fn page_count_rounds_up_and_never_drops_below_one() {
        assert_eq!(page_count(0, 9), 1);
        assert_eq!(page_count(1, 9), 1);
        assert_eq!(page_count(9, 9), 1);
        assert_eq!(page_count(10, 9), 2);
        assert_eq!(page_count(27, 9), 3);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn direction_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Direction::Asc).unwrap(), "\"ASC\"");
        assert_eq!(serde_json::to_string(&Direction::Desc).unwrap(), "\"DESC\"");
        assert_eq!(Direction::Asc.toggled(), Direction::Desc);
    }

    #[test]
    fn empty_search_serializes_as_empty_object() {
        let inquiry = Inquiry::<PropertyFacets>::new(9, "createdAt", Direction::Desc);
        let json = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "page": 1,
                "limit": 9,
                "sort": "createdAt",
                "direction": "DESC",
                "search": {}
            })
        );
    }

    #[test]
    fn well_formed_rejects_zero_page_and_limit() {
        let mut inquiry = Inquiry::<PropertyFacets>::new(9, "createdAt", Direction::Desc);
        assert!(inquiry.is_well_formed());
        inquiry.page = 0;
        assert!(!inquiry.is_well_formed());
        inquiry.page = 1;
        inquiry.limit = 0;
        assert!(!inquiry.is_well_formed());
    }
}
