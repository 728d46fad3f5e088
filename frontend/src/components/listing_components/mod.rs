pub mod cards;
pub mod facet_controls;
pub mod list_controls;
pub mod pagination;
