use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_communication_icons::MdForum;
use dioxus_free_icons::Icon;

use common::facets::{ListingMode, PropertyFacets, SaleMode};
use common::inquiry::{Direction, Inquiry};
use common::inquiry_codec;
use common::listing_const::{DEFAULT_SORT, PROPERTY_PAGE_SIZE};
use engine::ListingLocation;

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Motorhub - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                VehicleSearchCard {}
                CommunityCard {}
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to" }
            span { style: "color:#4F46E5;", "Motorhub!" }
        }
    }
}

/// Vehicle listing location for a search started on the home page.
fn vehicle_search(text: &str, mode: SaleMode) -> Route {
    let mut inquiry = Inquiry::<PropertyFacets>::new(PROPERTY_PAGE_SIZE, DEFAULT_SORT, Direction::Desc);
    inquiry.search.text = Some(text.to_string());
    let inquiry = inquiry.normalized();
    Route::properties(ListingLocation::new(
        Some(inquiry_codec::encode(&inquiry)),
        Some(mode.as_param().to_string()),
    ))
}

#[component]
fn VehicleSearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-vehicle-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 280px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "
                    font-size: 30px;
                    font-weight: 500;
                ",
                "Find your next car"
            }

            div {
                style: "display:flex; flex-direction:row; gap: 10px;",
                for mode in SaleMode::all().iter().copied() {
                    Link {
                        key: "{mode.as_param()}",
                        to: Route::properties(ListingLocation::canonical(Some(mode.as_param().to_string()))),
                        style: "color: white; font-size: 20px; border: 1px solid white; border-radius: 9999px; padding: 4px 16px;",
                        "{mode.label()}"
                    }
                }
            }

            div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%; " }

            SearchCardInput {}
        }
    }
}

#[component]
fn SearchCardInput() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Brand, model, keyword",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        n2.push(vehicle_search(&search_q.read(), SaleMode::Sale));
                    }
                },
            }
        }
    }
}

#[component]
fn CommunityCard() -> Element {
    rsx! {
        Link {
            to: Route::community(ListingLocation::default()),
            div {
                id: "x-card-community",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 12px;
                    width: 520px;
                    min-height: 280px;
                    border-radius: 22px;
                    padding: 22px 22px 26px 22px;
                    background: linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%);
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                Icon { icon: MdForum, style: "width: 32px; height: 32px;" }
                div {
                    style: "font-size: 26px; font-weight: 500;",
                    "Community"
                }
                div {
                    style: "
                        font-size: 20px;
                        font-weight: 500;
                        line-height: 1.6;
                        color: rgba(255,255,255,0.96);
                    ",
                    "Reviews, news and tips from owners and dealers."
                }
            }
        }
    }
}
