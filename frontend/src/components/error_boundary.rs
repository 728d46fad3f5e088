//! Error boundaries for render failures. A failing listing keeps the
//! navbar usable; a failing route falls back to the home link.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let detail = err.error().map(|e| format!("{:#?}", e.0)).unwrap_or_default();
                rsx! {
                    h1 {
                        style: "color:red; font-size: 54px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Error",
                    }
                    p {
                        style: "color:darkred; font-size: 26px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    // A plain anchor: the router itself may be what failed.
                    a {
                        href: "/",
                        style: "color:blue; font-size: 26px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Return to Home Page"
                    }
                    pre {
                        style: "color:black; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{detail}"
                    }
                }
            },
            children
        }
    }
}

/// Wraps one listing. "Try Again" clears the error and re-renders the
/// listing, which refetches on mount.
#[component]
pub fn ListingErrorBoundary(title: String, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let detail = err
                    .error()
                    .map(|e| format!("{:#?}", e.0))
                    .unwrap_or_else(|| "Unknown error".to_string());
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; align-items: center; justify-content: center; width: 100%; height: 100%;",
                        h1 {
                            style: "color:red; font-size: 34px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px;",
                            "{title} failed to render",
                        }
                        pre {
                            style: "color:darkred; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                            "{detail}"
                        }
                        div {
                            style: "display: flex; flex-direction: row; gap: 10px;",
                            button {
                                style: "color:blue; font-size: 22px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                                onclick: move |_| err.clear_errors(),
                                "Try Again"
                            }
                            Link {
                                to: Route::HomePage {},
                                style: "color:blue; font-size: 22px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                                "Home"
                            }
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}
