//! Community articles, one tab per category.

use common::{
    facets::{ArticleCategory, ArticleFacets, FacetSet, ListingMode},
    inquiry::{Direction, Inquiry},
    listing_const::{ARTICLE_PAGE_SIZE, DEFAULT_SORT},
    listing_items::ArticleItem,
};
use dioxus::prelude::*;
use engine::{EngineConfig, ListingLocation, ToggleKind};

use crate::{
    api::resources,
    components::error_boundary::ListingErrorBoundary,
    components::listing_components::{
        cards::ArticleCard,
        facet_controls::{ModeTabs, TextSearchInput},
        list_controls::{ListingStatus, SortSelect},
        pagination::PaginationControls,
    },
    data_definitions::{
        facet_options::{ARTICLE_SORTS, owned_pairs},
        listing::{ListingSetup, use_listing, use_toggle},
        url_param::{UrlParam, listing_location},
    },
    pages::{LISTING_GRID_STYLE, LISTING_MAIN_STYLE, mode_tabs},
    routes::Route,
};

#[component]
pub fn CommunityPage(input: UrlParam, mode: UrlParam) -> Element {
    rsx! {
        Title { "Community" }
        ListingErrorBoundary { title: "Community",
            CommunityListing { location: listing_location(&input, &mode) }
        }
    }
}

#[component]
fn CommunityListing(location: ReadSignal<ListingLocation>) -> Element {
    let listing = use_listing::<ArticleFacets, ArticleItem>(
        || ListingSetup {
            default: Inquiry::new(ARTICLE_PAGE_SIZE, DEFAULT_SORT, Direction::Desc)
                .with_search(ArticleFacets { article_category: Some(ArticleCategory::Free), text: None }),
            resource: resources::ARTICLES,
            config: EngineConfig::default(),
            to_route: Route::community,
        },
        location,
    );
    let toggle = use_toggle(listing);
    let state = listing.state();
    let selected = state.mode.map(|m| m.as_param().to_string());

    rsx! {
        div {
            style: LISTING_MAIN_STYLE,
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                ModeTabs {
                    tabs: mode_tabs::<ArticleCategory>(),
                    selected,
                    on_select: move |param: String| {
                        if let Some(category) = ArticleCategory::from_param(&param) {
                            listing.engine().set_mode(category);
                        }
                    },
                }
                div { style: "flex-grow: 1; max-width: 320px;",
                    TextSearchInput {
                        placeholder: "Search articles",
                        initial: state.inquiry.search.text().unwrap_or_default().to_string(),
                        on_input: move |text: String| listing.engine().set_text(text),
                    }
                }
                SortSelect {
                    options: owned_pairs(ARTICLE_SORTS),
                    sort: state.inquiry.sort.clone(),
                    direction: state.inquiry.direction,
                    on_change: move |(sort, direction): (String, Direction)| { listing.engine().set_sort(sort, direction); },
                }
            }
            ListingStatus {
                loading: state.loading,
                error: state.error.as_ref().map(|e| e.user_message()),
                is_empty: state.is_empty_state(),
            }
            div {
                style: LISTING_GRID_STYLE,
                for item in state.list.iter().cloned() {
                    ArticleCard {
                        key: "{item.id}",
                        item,
                        on_like: move |id: String| toggle.call((ToggleKind::LikeArticle, id)),
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
