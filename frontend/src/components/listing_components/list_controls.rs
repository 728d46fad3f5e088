//! Header row above the results: sort, reset, and the status banner.

use common::inquiry::Direction;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::md_navigation_icons::{MdArrowDownward, MdArrowUpward, MdRefresh},
};

#[component]
pub fn SortSelect(options: Vec<(String, String)>, sort: String, direction: Direction, on_change: Callback<(String, Direction)>) -> Element {
    let current = sort.clone();
    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 6px; align-items: center;",
            select {
                style: "padding: 6px; border-radius: 6px;",
                onchange: move |e: FormEvent| on_change.call((e.value(), direction)),
                for (field, label) in options {
                    option {
                        key: "{field}",
                        value: "{field}",
                        selected: field == current,
                        "{label}"
                    }
                }
            }
            button {
                title: "Toggle direction",
                style: "width: 32px; height: 32px; background: white; border-radius: 8px; cursor: pointer;",
                onclick: move |_| on_change.call((sort.clone(), direction.toggled())),
                if direction == Direction::Desc {
                    Icon { icon: MdArrowDownward, style: "width: 20px; height: 20px;" }
                } else {
                    Icon { icon: MdArrowUpward, style: "width: 20px; height: 20px;" }
                }
            }
        }
    }
}

#[component]
pub fn ResetButton(on_reset: Callback<()>) -> Element {
    rsx! {
        button {
            title: "Reset filters",
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                padding: 6px 12px;
                background: white;
                border-radius: 8px;
                border: 1px solid rgba(0,0,0,0.3);
                cursor: pointer;
            ",
            onclick: move |_| on_reset.call(()),
            Icon { icon: MdRefresh, style: "width: 20px; height: 20px;" }
            "Reset"
        }
    }
}

/// Loading, failure and empty states. Stale results stay visible under a
/// failure banner; see the engine's stale-while-revalidate rule.
#[component]
pub fn ListingStatus(loading: bool, error: Option<String>, is_empty: bool) -> Element {
    rsx! {
        if let Some(error) = error {
            div {
                style: "color: darkred; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 10px;",
                "{error}"
            }
        }
        if loading {
            LoadingIndicator {}
        } else if is_empty {
            div {
                style: "color: rgba(0,0,0,0.5); font-size: 20px; padding: 40px; text-align: center;",
                "Nothing listed here yet."
            }
        }
    }
}

#[component]
fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color: rgba(0,0,0,0.6); font-size: 18px; padding: 10px; margin: 10px;",
            "Loading..."
        }
    }
}
