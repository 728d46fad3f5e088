//! Facet inputs for the listing side panel. They report user intent through
//! callbacks; the page's engine decides what the inquiry becomes.

use common::facets::Range;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

#[component]
pub fn FacetSection(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                padding: 10px;
                border-bottom: 1px solid rgba(0,0,0,0.1);
            ",
            h3 {
                style: "font-size: 16px; font-weight: 500; color: rgb(75, 87, 112); margin: 0 0 6px 0;",
                "{title}"
            }
            {children}
        }
    }
}

#[component]
pub fn FacetCheckboxList(title: String, options: Vec<String>, selected: Vec<String>, on_toggle: Callback<String>) -> Element {
    rsx! {
        FacetSection {
            title,
            for option in options {
                FacetCheckbox {
                    key: "{option}",
                    is_checked: selected.contains(&option),
                    facet_value: option.clone(),
                    on_toggle,
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(is_checked: ReadSignal<bool>, facet_value: ReadSignal<String>, on_toggle: Callback<String>) -> Element {
    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 2px;
                align-items: center;
            ",
            onclick: move |_e| on_toggle.call(facet_value.read().clone()),

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 15px;
                    line-height: 22px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{facet_value}"
            }
        }
    }
}

/// Two number boxes committed on change (blur or enter), never per keystroke.
#[component]
pub fn RangeFacetInputs(title: String, bounds: (i64, i64), value: ReadSignal<Option<Range>>, on_commit: Callback<Range>) -> Element {
    let current = use_memo(move || value().unwrap_or(Range::new(bounds.0, bounds.1)));

    let commit = move |start: Option<i64>, end: Option<i64>| {
        let current = current();
        let start = start.unwrap_or(current.start).clamp(bounds.0, bounds.1);
        let end = end.unwrap_or(current.end).clamp(bounds.0, bounds.1);
        on_commit.call(Range::new(start.min(end), start.max(end)));
    };

    rsx! {
        FacetSection {
            title,
            div {
                style: "display: flex; flex-direction: row; gap: 8px; align-items: center;",
                input {
                    r#type: "number",
                    style: "width: 100px; padding: 4px;",
                    value: "{current().start}",
                    onchange: move |e: FormEvent| commit(e.value().trim().parse().ok(), None),
                }
                span { "-" }
                input {
                    r#type: "number",
                    style: "width: 100px; padding: 4px;",
                    value: "{current().end}",
                    onchange: move |e: FormEvent| commit(None, e.value().trim().parse().ok()),
                }
            }
        }
    }
}

/// Free-text box. Every keystroke is forwarded; the engine debounces.
#[component]
pub fn TextSearchInput(placeholder: String, initial: String, on_input: Callback<String>) -> Element {
    let mut text = use_signal(|| initial.clone());
    // Reset and back/forward rewrite the inquiry text behind the box.
    use_effect(use_reactive((&initial,), move |(initial,)| {
        if text.peek().trim() != initial.trim() {
            text.set(initial);
        }
    }));
    rsx! {
        input {
            r#type: "search",
            placeholder: "{placeholder}",
            style: "
                width: 100%;
                padding: 8px 12px;
                font-size: 16px;
                border: 1px solid rgba(0,0,0,0.3);
                border-radius: 8px;
            ",
            value: "{text}",
            oninput: move |e: FormEvent| {
                text.set(e.value());
                on_input.call(e.value());
            },
        }
    }
}

/// Mutually exclusive tabs: buy/rent, article category, listing status.
#[component]
pub fn ModeTabs(tabs: Vec<(String, String)>, selected: Option<String>, on_select: Callback<String>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 4px; padding: 10px;",
            for (param, label) in tabs {
                button {
                    key: "{param}",
                    style: if selected.as_deref() == Some(param.as_str()) {
                        "padding: 6px 16px; border-radius: 1000px; border: 2px solid rgba(0,0,255,0.9); background: white; cursor: pointer;"
                    } else {
                        "padding: 6px 16px; border-radius: 1000px; border: 2px solid rgba(0,0,0,0.2); background: white; cursor: pointer;"
                    },
                    onclick: {
                        let param = param.clone();
                        move |_| on_select.call(param.clone())
                    },
                    "{label}"
                }
            }
        }
    }
}
