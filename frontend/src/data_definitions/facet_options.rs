//! Choices offered by the facet controls.

use common::listing_const::DEFAULT_SORT;

pub const VEHICLE_LOCATIONS: &[&str] = &["SEOUL", "BUSAN", "INCHEON", "DAEGU", "GWANGJU", "DAEJEON", "JEJU"];
pub const VEHICLE_TYPES: &[&str] = &["SEDAN", "SUV", "COUPE", "HATCHBACK", "TRUCK", "VAN", "CONVERTIBLE"];
pub const VEHICLE_BRANDS: &[&str] = &["BMW", "AUDI", "MERCEDES", "TOYOTA", "HYUNDAI", "KIA", "TESLA"];

pub const PRICE_BOUNDS: (i64, i64) = (0, 500_000);
pub const YEAR_BOUNDS: (i64, i64) = (1990, 2026);

/// `(sort field, label)`.
pub const VEHICLE_SORTS: &[(&str, &str)] = &[
    (DEFAULT_SORT, "Newest"),
    ("propertyPrice", "Price"),
    ("propertyYear", "Year"),
    ("propertyViews", "Most viewed"),
    ("propertyLikes", "Most liked"),
];

pub const AGENT_SORTS: &[(&str, &str)] = &[
    (DEFAULT_SORT, "Newest"),
    ("memberRank", "Rank"),
    ("memberLikes", "Most liked"),
    ("memberFollowers", "Most followed"),
];

pub const ARTICLE_SORTS: &[(&str, &str)] = &[
    (DEFAULT_SORT, "Newest"),
    ("articleViews", "Most viewed"),
    ("articleLikes", "Most liked"),
];

pub fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn owned_pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
    values.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect()
}
