pub mod agent_page;
pub mod community_page;
pub mod home_page;
pub mod my_page;
pub mod property_page;

use common::facets::ListingMode;

pub const LISTING_PAGE_STYLE: &str = "
    display: flex;
    flex-direction: row;
    width: 100%;
    height: 100%;
";

pub const LISTING_SIDE_PANEL_STYLE: &str = "
    display: flex;
    flex-direction: column;
    gap: 6px;
    width: 280px;
    flex-shrink: 0;
    padding: 12px;
    background-color: #ECEEF2;
    overflow-y: auto;
";

pub const LISTING_MAIN_STYLE: &str = "
    display: flex;
    flex-direction: column;
    gap: 10px;
    flex-grow: 1;
    min-width: 400px;
    padding: 12px;
    overflow-y: auto;
";

pub const LISTING_GRID_STYLE: &str = "
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 16px;
";

/// `(param, label)` for every mode of `M`.
pub fn mode_tabs<M: ListingMode>() -> Vec<(String, String)> {
    M::all()
        .iter()
        .map(|mode| (mode.as_param().to_string(), mode.label().to_string()))
        .collect()
}
