//! Navigation Header Component
//!
//! Desktop: logo left, links right; gains the `scrolled` style once the page
//! scrolls past the configured offset.
//! Mobile: links collapse behind a menu button; following a link closes
//! the menu.

use dioxus::prelude::*;
use portfolio_core::nav::{is_active_link, MenuState, NavbarStyle, NAV_ENTRIES};

use crate::app::Route;
use crate::context::{use_scroll_offset, use_site_config};

/// Navigation Header component
#[component]
pub fn NavHeader() -> Element {
    let config = use_site_config();
    let offset = use_scroll_offset();
    let route = use_route::<Route>();
    let path = route.to_string();

    let mut menu = use_signal(MenuState::default);

    let threshold = config.navbar_scroll_threshold;
    let navbar = use_memo(move || NavbarStyle::from_offset(offset(), threshold));

    rsx! {
        nav { id: "navbar", class: navbar().class(),
            div { class: "nav-container",
                Link { class: "logo", to: Route::Home {}, "{config.owner_name}" }

                button {
                    id: "mobileMenu",
                    class: menu().class("mobile-menu"),
                    "aria-label": "Toggle navigation",
                    "aria-expanded": "{menu().is_open()}",
                    onclick: move |_| menu.set(menu().toggled()),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }

                ul { id: "navLinks", class: menu().class("nav-links"),
                    for entry in NAV_ENTRIES {
                        li { key: "{entry.href}",
                            Link {
                                to: Route::for_page(entry.href),
                                class: if is_active_link(entry.href, &path) { "active".to_string() } else { String::new() },
                                onclick: move |_| menu.set(menu().link_followed()),
                                "{entry.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
