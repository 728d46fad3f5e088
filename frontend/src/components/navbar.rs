//! Side navigation bar and the page outlet.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdExitToApp, MdFavorite, MdHome, MdList, MdSearch};
use dioxus_free_icons::icons::md_communication_icons::MdForum;
use dioxus_free_icons::icons::md_social_icons::{MdGroup, MdPerson};
use dioxus_free_icons::{Icon, IconShape};
use engine::{ListingLocation, SessionCell};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session_store::sign_out;
use crate::routes::Route;

const SIDEBAR_COLUMN_STYLE: &str = "
    display:flex;
    flex-direction: column;
    gap: 24px;
    width: 38px;
    align-items: center;
    justify-content: center;
";

/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                ",

                NavbarTopIconLinks{},

                div {
                    style: "flex-grow:1;"
                }
                NavbarViewer{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: SIDEBAR_COLUMN_STYLE,
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            IconLink { to: Route::properties(ListingLocation::default()), icon: MdSearch, label: "Vehicles" }
            IconLink { to: Route::agents(ListingLocation::default()), icon: MdGroup, label: "Agents" }
            IconLink { to: Route::community(ListingLocation::default()), icon: MdForum, label: "Community" }
        }
    }
}

/// Personal pages and sign-out when a member is stored, a guest marker otherwise.
#[component]
fn NavbarViewer() -> Element {
    let session = use_context::<SessionCell>();
    let mut viewer = use_signal(|| session.view().current());
    let nav = navigator();

    let Some(actor) = viewer() else {
        return rsx! {
            div {
                style: SIDEBAR_COLUMN_STYLE,
                span {
                    style: "color:white;",
                    title: "Guest",
                    Icon { icon: MdPerson, style: "width: 26px; height: 26px;" }
                }
            }
        };
    };

    rsx! {
        div {
            style: SIDEBAR_COLUMN_STYLE,
            IconLink { to: Route::my_properties(ListingLocation::default()), icon: MdList, label: "My vehicles" }
            IconLink { to: Route::favorites(ListingLocation::default()), icon: MdFavorite, label: "My favorites" }
            span {
                style: "color:white;",
                title: "{actor.member_nick}",
                Icon { icon: MdPerson, style: "width: 26px; height: 26px;" }
            }
            button {
                style: "color:white; background: none; border: none; cursor: pointer; padding: 0;",
                title: "Sign out",
                onclick: move |_| {
                    sign_out(&session);
                    viewer.set(None);
                    nav.push(Route::HomePage {});
                },
                Icon { icon: MdExitToApp, style: "width: 26px; height: 26px;" }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "color:white;",
                title: "{label}",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
