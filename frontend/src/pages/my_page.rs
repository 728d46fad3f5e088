//! The signed-in member's own vehicles and favorites. Neither listing
//! fetches for an anonymous viewer.

use common::{
    facets::{FavoriteFacets, ListingMode, MyPropertyFacets, PropertyStatus},
    inquiry::{Direction, Inquiry},
    listing_const::{DEFAULT_SORT, FAVORITE_PAGE_SIZE, MY_PROPERTY_PAGE_SIZE},
    listing_items::PropertyItem,
};
use dioxus::prelude::*;
use engine::{EngineConfig, ListingLocation, ToggleKind};

use crate::{
    api::resources,
    components::error_boundary::ListingErrorBoundary,
    components::listing_components::{
        cards::PropertyCard,
        facet_controls::ModeTabs,
        list_controls::ListingStatus,
        pagination::PaginationControls,
    },
    data_definitions::{
        listing::{ListingSetup, use_listing, use_toggle},
        url_param::{UrlParam, listing_location},
    },
    pages::{LISTING_GRID_STYLE, LISTING_MAIN_STYLE, mode_tabs},
    routes::Route,
};

#[component]
pub fn MyPropertiesPage(input: UrlParam, mode: UrlParam) -> Element {
    rsx! {
        Title { "My vehicles" }
        ListingErrorBoundary { title: "My vehicles",
            MyPropertiesListing { location: listing_location(&input, &mode) }
        }
    }
}

#[component]
fn MyPropertiesListing(location: ReadSignal<ListingLocation>) -> Element {
    let listing = use_listing::<MyPropertyFacets, PropertyItem>(
        || ListingSetup {
            default: Inquiry::new(MY_PROPERTY_PAGE_SIZE, DEFAULT_SORT, Direction::Desc)
                .with_search(MyPropertyFacets { property_status: Some(PropertyStatus::Active) }),
            resource: resources::MY_PROPERTIES,
            config: EngineConfig::personal(),
            to_route: Route::my_properties,
        },
        location,
    );
    let toggle = use_toggle(listing);
    let state = listing.state();

    rsx! {
        div {
            style: LISTING_MAIN_STYLE,
            h2 { style: "margin: 10px;", "My vehicles" }
            ModeTabs {
                tabs: mode_tabs::<PropertyStatus>(),
                selected: state.mode.map(|m| m.as_param().to_string()),
                on_select: move |param: String| {
                    if let Some(status) = PropertyStatus::from_param(&param) {
                        listing.engine().set_mode(status);
                    }
                },
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

#[component]
pub fn MyFavoritesPage(input: UrlParam) -> Element {
    rsx! {
        Title { "My favorites" }
        ListingErrorBoundary { title: "My favorites",
            MyFavoritesListing { location: listing_location(&input, &UrlParam::default()) }
        }
    }
}

#[component]
fn MyFavoritesListing(location: ReadSignal<ListingLocation>) -> Element {
    let listing = use_listing::<FavoriteFacets, PropertyItem>(
        || ListingSetup {
            default: Inquiry::new(FAVORITE_PAGE_SIZE, DEFAULT_SORT, Direction::Desc),
            resource: resources::FAVORITES,
            config: EngineConfig::personal(),
            to_route: Route::favorites,
        },
        location,
    );
    let toggle = use_toggle(listing);
    let state = listing.state();

    rsx! {
        div {
            style: LISTING_MAIN_STYLE,
            h2 { style: "margin: 10px;", "My favorites" }
            ListingStatus {
                loading: state.loading,
                error: state.error.as_ref().map(|e| e.user_message()),
                is_empty: state.is_empty_state(),
            }
            div {
                style: LISTING_GRID_STYLE,
                // Unliking here drops the card once the refetch lands.
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
