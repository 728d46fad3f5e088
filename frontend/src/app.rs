use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session_store::hydrate_session;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_context_provider(hydrate_session);

    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,100..900;1,100..900&display=swap" }

        ToastProvider {
            GlobalErrorBoundary {
                boundary_name: "App".to_string(),
                Router::<Route> {}
            }
        }
    }
}
