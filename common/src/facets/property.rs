//! Vehicle listing facets.

use serde::{Deserialize, Serialize};

use super::{FacetSet, ListingMode, Range, normalize_list, normalize_text, overlay_field};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PropertyFacets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_sale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_rent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices_range: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_range: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyList {
    Location,
    Type,
    Brand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyRange {
    Prices,
    Years,
}

/// Buy/rent tab. Written into the `forSale`/`forRent` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaleMode {
    Sale,
    Rent,
}

impl ListingMode for SaleMode {
    fn as_param(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Rent => "rent",
        }
    }

    fn from_param(param: &str) -> Option<Self> {
        match param.trim().to_ascii_lowercase().as_str() {
            "sale" => Some(Self::Sale),
            "rent" => Some(Self::Rent),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Sale, Self::Rent]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Sale => "Buy",
            Self::Rent => "Rent",
        }
    }
}

impl FacetSet for PropertyFacets {
    type List = PropertyList;
    type Range = PropertyRange;
    type Mode = SaleMode;

    fn list_mut(&mut self, facet: PropertyList) -> &mut Option<Vec<String>> {
        match facet {
            PropertyList::Location => &mut self.location_list,
            PropertyList::Type => &mut self.type_list,
            PropertyList::Brand => &mut self.brand_list,
        }
    }

    fn list(&self, facet: PropertyList) -> &[String] {
        let list = match facet {
            PropertyList::Location => &self.location_list,
            PropertyList::Type => &self.type_list,
            PropertyList::Brand => &self.brand_list,
        };
        list.as_deref().unwrap_or_default()
    }

    fn range_mut(&mut self, facet: PropertyRange) -> &mut Option<Range> {
        match facet {
            PropertyRange::Prices => &mut self.prices_range,
            PropertyRange::Years => &mut self.years_range,
        }
    }

    fn range(&self, facet: PropertyRange) -> Option<Range> {
        match facet {
            PropertyRange::Prices => self.prices_range,
            PropertyRange::Years => self.years_range,
        }
    }

    fn text_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.text)
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn mode(&self) -> Option<SaleMode> {
        match (self.for_sale, self.for_rent) {
            (Some(true), Some(true)) => None,
            (Some(true), _) => Some(SaleMode::Sale),
            (_, Some(true)) => Some(SaleMode::Rent),
            _ => None,
        }
    }

    fn apply_mode(&mut self, mode: SaleMode) {
        self.for_sale = Some(mode == SaleMode::Sale);
        self.for_rent = Some(mode == SaleMode::Rent);
    }

    fn overlay(&mut self, patch: Self) {
        overlay_field(&mut self.location_list, patch.location_list);
        overlay_field(&mut self.type_list, patch.type_list);
        overlay_field(&mut self.brand_list, patch.brand_list);
        overlay_field(&mut self.for_sale, patch.for_sale);
        overlay_field(&mut self.for_rent, patch.for_rent);
        overlay_field(&mut self.prices_range, patch.prices_range);
        overlay_field(&mut self.years_range, patch.years_range);
        overlay_field(&mut self.text, patch.text);
    }

    fn normalize(&mut self) {
        normalize_list(&mut self.location_list);
        normalize_list(&mut self.type_list);
        normalize_list(&mut self.brand_list);
        normalize_text(&mut self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_mode_writes_both_halves() {
        let mut facets = PropertyFacets::default();
        facets.apply_mode(SaleMode::Rent);
        assert_eq!(facets.for_sale, Some(false));
        assert_eq!(facets.for_rent, Some(true));
        assert_eq!(facets.mode(), Some(SaleMode::Rent));

        facets.apply_mode(SaleMode::Sale);
        assert_eq!((facets.for_sale, facets.for_rent), (Some(true), Some(false)));
    }

    #[test]
    fn mode_is_ambiguous_when_both_flags_set() {
        let facets = PropertyFacets { for_sale: Some(true), for_rent: Some(true), ..Default::default() };
        assert_eq!(facets.mode(), None);
    }

    #[test]
    fn overlay_replaces_only_set_fields() {
        let mut base = PropertyFacets {
            brand_list: Some(vec!["BMW".into()]),
            text: Some("coupe".into()),
            ..Default::default()
        };
        base.overlay(PropertyFacets { prices_range: Some(Range::new(10, 20)), ..Default::default() });
        assert_eq!(base.brand_list.as_deref(), Some(&["BMW".to_string()][..]));
        assert_eq!(base.text.as_deref(), Some("coupe"));
        assert_eq!(base.prices_range, Some(Range::new(10, 20)));
    }

    #[test]
    fn serializes_camel_case_and_omits_unset() {
        let facets = PropertyFacets {
            brand_list: Some(vec!["BMW".into()]),
            for_sale: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&facets).unwrap();
        assert_eq!(json, serde_json::json!({ "brandList": ["BMW"], "forSale": true }));
    }

    #[test]
    fn mode_param_is_case_insensitive() {
        assert_eq!(SaleMode::from_param("RENT"), Some(SaleMode::Rent));
        assert_eq!(SaleMode::from_param("lease"), None);
    }
}
