//! Dealers and agents, with like and follow.

use common::{
    facets::{AgentFacets, AgentList, FacetSet},
    inquiry::{Direction, Inquiry},
    listing_const::{AGENT_PAGE_SIZE, DEFAULT_SORT},
    listing_items::MemberItem,
};
use dioxus::prelude::*;
use engine::{EngineConfig, ListingLocation, ToggleKind};

use crate::{
    api::resources,
    components::error_boundary::ListingErrorBoundary,
    components::listing_components::{
        cards::AgentCard,
        facet_controls::{FacetCheckboxList, TextSearchInput},
        list_controls::{ListingStatus, ResetButton, SortSelect},
        pagination::PaginationControls,
    },
    data_definitions::{
        facet_options::{AGENT_SORTS, VEHICLE_LOCATIONS, owned, owned_pairs},
        listing::{ListingSetup, use_listing, use_toggle},
        url_param::{UrlParam, listing_location},
    },
    pages::{LISTING_GRID_STYLE, LISTING_MAIN_STYLE, LISTING_PAGE_STYLE, LISTING_SIDE_PANEL_STYLE},
    routes::Route,
};

#[component]
pub fn AgentPage(input: UrlParam) -> Element {
    rsx! {
        Title { "Agents" }
        ListingErrorBoundary { title: "Agents",
            AgentListing { location: listing_location(&input, &UrlParam::default()) }
        }
    }
}

#[component]
fn AgentListing(location: ReadSignal<ListingLocation>) -> Element {
    let listing = use_listing::<AgentFacets, MemberItem>(
        || ListingSetup {
            default: Inquiry::new(AGENT_PAGE_SIZE, DEFAULT_SORT, Direction::Desc),
            resource: resources::AGENTS,
            config: EngineConfig::default(),
            to_route: Route::agents,
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
                    placeholder: "Search agents",
                    initial: search.text().unwrap_or_default().to_string(),
                    on_input: move |text: String| listing.engine().set_text(text),
                }
                FacetCheckboxList {
                    title: "Location",
                    options: owned(VEHICLE_LOCATIONS),
                    selected: search.list(AgentList::Location).to_vec(),
                    on_toggle: move |value: String| { listing.engine().toggle_list_facet(AgentList::Location, &value); },
                }
            }
            div {
                style: LISTING_MAIN_STYLE,
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                    div { style: "flex-grow: 1;" }
                    SortSelect {
                        options: owned_pairs(AGENT_SORTS),
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
                        AgentCard {
                            key: "{item.id}",
                            item,
                            on_like: move |id: String| toggle.call((ToggleKind::LikeMember, id)),
                            on_follow: move |(id, followed): (String, bool)| {
                                let kind = if followed { ToggleKind::Unsubscribe } else { ToggleKind::Subscribe };
                                toggle.call((kind, id));
                            },
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
