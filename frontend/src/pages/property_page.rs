//! Vehicle listings: every facet kind, buy/rent tabs, sort and text search.

use common::{
    facets::{FacetSet, ListingMode, PropertyFacets, PropertyList, PropertyRange, Range, SaleMode},
    inquiry::{Direction, Inquiry},
    listing_const::{DEFAULT_SORT, PROPERTY_PAGE_SIZE},
    listing_items::PropertyItem,
};
use dioxus::prelude::*;
use engine::{EngineConfig, ListingLocation, ToggleKind};

use crate::{
    api::resources,
    components::error_boundary::ListingErrorBoundary,
    components::listing_components::{
        cards::PropertyCard,
        facet_controls::{FacetCheckboxList, ModeTabs, RangeFacetInputs, TextSearchInput},
        list_controls::{ListingStatus, ResetButton, SortSelect},
        pagination::PaginationControls,
    },
    data_definitions::{
        facet_options::{PRICE_BOUNDS, VEHICLE_BRANDS, VEHICLE_LOCATIONS, VEHICLE_SORTS, VEHICLE_TYPES, YEAR_BOUNDS, owned, owned_pairs},
        listing::{ListingSetup, use_listing, use_toggle},
        url_param::{UrlParam, listing_location},
    },
    pages::{LISTING_GRID_STYLE, LISTING_MAIN_STYLE, LISTING_PAGE_STYLE, LISTING_SIDE_PANEL_STYLE, mode_tabs},
    routes::Route,
};

#[component]
pub fn PropertyPage(input: UrlParam, mode: UrlParam) -> Element {
    rsx! {
        Title { "Vehicles" }
        ListingErrorBoundary { title: "Vehicles",
            PropertyListing { location: listing_location(&input, &mode) }
        }
    }
}

#[component]
fn PropertyListing(location: ReadSignal<ListingLocation>) -> Element {
    let listing = use_listing::<PropertyFacets, PropertyItem>(
        || ListingSetup {
            default: Inquiry::new(PROPERTY_PAGE_SIZE, DEFAULT_SORT, Direction::Desc),
            resource: resources::PROPERTIES,
            config: EngineConfig::default(),
            to_route: Route::properties,
        },
        location,
    );
    let toggle = use_toggle(listing);
    let state = listing.state();
    let search = state.inquiry.search.clone();

    rsx! {
        div {
            style: LISTING_PAGE_STYLE,
            div {
                style: LISTING_SIDE_PANEL_STYLE,
                TextSearchInput {
                    placeholder: "Search vehicles",
                    initial: search.text().unwrap_or_default().to_string(),
                    on_input: move |text: String| listing.engine().set_text(text),
                }
                FacetCheckboxList {
                    title: "Location",
                    options: owned(VEHICLE_LOCATIONS),
                    selected: search.list(PropertyList::Location).to_vec(),
                    on_toggle: move |value: String| { listing.engine().toggle_list_facet(PropertyList::Location, &value); },
                }
                FacetCheckboxList {
                    title: "Type",
                    options: owned(VEHICLE_TYPES),
                    selected: search.list(PropertyList::Type).to_vec(),
                    on_toggle: move |value: String| { listing.engine().toggle_list_facet(PropertyList::Type, &value); },
                }
                FacetCheckboxList {
                    title: "Brand",
                    options: owned(VEHICLE_BRANDS),
                    selected: search.list(PropertyList::Brand).to_vec(),
                    on_toggle: move |value: String| { listing.engine().toggle_list_facet(PropertyList::Brand, &value); },
                }
                RangeFacetInputs {
                    title: "Price",
                    bounds: PRICE_BOUNDS,
                    value: search.range(PropertyRange::Prices),
                    on_commit: move |range: Range| { listing.engine().commit_range_facet(PropertyRange::Prices, range); },
                }
                RangeFacetInputs {
                    title: "Year",
                    bounds: YEAR_BOUNDS,
                    value: search.range(PropertyRange::Years),
                    on_commit: move |range: Range| { listing.engine().commit_range_facet(PropertyRange::Years, range); },
                }
            }
            div {
                style: LISTING_MAIN_STYLE,
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                    ModeTabs {
                        tabs: mode_tabs::<SaleMode>(),
                        selected: state.mode.map(|m| m.as_param().to_string()),
                        on_select: move |param: String| {
                            if let Some(mode) = SaleMode::from_param(&param) {
                                listing.engine().set_mode(mode);
                            }
                        },
                    }
                    div { style: "flex-grow: 1;" }
                    SortSelect {
                        options: owned_pairs(VEHICLE_SORTS),
                        sort: state.inquiry.sort.clone(),
                        direction: state.inquiry.direction,
                        on_change: move |(sort, direction): (String, Direction)| { listing.engine().set_sort(sort, direction); },
                    }
                    ResetButton { on_reset: move |_| { listing.engine().reset(); } }
                }
                ListingStatus {
                    loading: state.loading,
                    error: state.error.as_ref().map(|e| e.user_message()),
                    is_empty: state.is_empty_state(),
                }
                div {
                    style: LISTING_GRID_STYLE,
                    for item in state.list.iter().cloned() {
                        PropertyCard {
                            key: "{item.id}",
                            item,
                            on_like: move |id: String| toggle.call((ToggleKind::LikeProperty, id)),
                        }
                    }
                }
                PaginationControls {
                    page: state.inquiry.page,
                    page_count: state.page_count(),
                    total_count: state.total_count,
                    on_page: move |page: u32| { listing.engine().paginate(page); },
                }
            }
        }
    }
}
