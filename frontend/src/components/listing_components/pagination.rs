//! Page navigation under a listing.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

#[component]
pub fn PaginationControls(page: ReadSignal<u32>, page_count: ReadSignal<u64>, total_count: ReadSignal<u64>, on_page: Callback<u32>) -> Element {
    let can_go_to_previous_page = use_memo(move || page() > 1);
    let can_go_to_next_page = use_memo(move || u64::from(page()) < page_count());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
                padding: 12px;
            ",
            div {
                style: "font-size: 16px; color: rgba(0,0,0,0.6);",
                "Total {total_count} listed"
            }
            // prev page
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| on_page.call(page().saturating_sub(1)),
            }
            // current page counter
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    border-left: 1px solid rgba(0,0,0,0.1);
                    border-right: 1px solid rgba(0,0,0,0.1);
                    padding: 4px 26px;
                    margin-left: -28px;
                    margin-right: -28px;
                ",
                "{page}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{page_count}"
                }
            }
            // next page
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| on_page.call(page() + 1),
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick.call(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
