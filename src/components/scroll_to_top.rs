//! Floating scroll-to-top button.

use dioxus::prelude::*;
use portfolio_core::scroll::{scroll_top_style, SCROLL_TOP_GLYPH};
use portfolio_core::{Elevation, ScrollTopVisibility};

use crate::browser;
use crate::context::{use_scroll_offset, use_site_config};

/// Shown once the page scrolls past the configured offset; lifts on hover.
#[component]
pub fn ScrollToTop() -> Element {
    let config = use_site_config();
    let offset = use_scroll_offset();
    let mut elevation = use_signal(Elevation::default);

    let threshold = config.scroll_top_threshold;
    let visibility = use_memo(move || ScrollTopVisibility::from_offset(offset(), threshold));
    let style = scroll_top_style(visibility(), elevation());

    rsx! {
        button {
            class: "scroll-to-top",
            style: "{style}",
            "aria-label": "Scroll to top",
            onclick: move |_| browser::scroll_to_top(),
            onmouseenter: move |_| elevation.set(Elevation::Raised),
            onmouseleave: move |_| elevation.set(Elevation::Resting),
            "{SCROLL_TOP_GLYPH}"
        }
    }
}
