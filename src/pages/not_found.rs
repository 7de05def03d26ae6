use dioxus::prelude::*;

use crate::app::Route;

/// Fallback for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(path = %path, "No route for path");

    rsx! {
        section { class: "section page-top not-found",
            h2 { class: "section-title", "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back home" }
        }
    }
}
