use std::rc::Rc;

use dioxus::prelude::*;

use crate::browser;
use crate::components::{NavHeader, ScrollToTop};
use crate::context::{get_site_config, ScrollOffset};
use crate::pages::{About, Contact, Home, NotFound, Projects};
use crate::reveal::RevealGroups;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// Paths keep the `.html` names of the static site so existing links and
/// the active-link rule keep working.
///
/// - `/` - Home (`/index.html` redirects here)
/// - `/about.html` - Skills and experience
/// - `/projects.html` - Project cards
/// - `/contact.html` - Contact form
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[redirect("/index.html", || Route::Home {})]
        #[route("/about.html")]
        About {},
        #[route("/projects.html")]
        Projects {},
        #[route("/contact.html")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Route serving the page a nav link points at
    pub fn for_page(href: &str) -> Route {
        match href {
            "about.html" => Route::About {},
            "projects.html" => Route::Projects {},
            "contact.html" => Route::Contact {},
            _ => Route::Home {},
        }
    }
}

/// Root application component.
///
/// Provides global styles, config, scroll tracking, reveal observers and
/// routing.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(get_site_config);

    // One scroll listener feeds every scroll-driven component
    let mut offset = use_signal(browser::scroll_offset);
    use_context_provider(|| ScrollOffset(offset));
    use_hook(|| Rc::new(browser::on_scroll(move |y| offset.set(y))));

    use_context_provider(|| RevealGroups::new(&config));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Chrome shared by every page: navbar, page body, scroll-to-top button.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        NavHeader {}
        Outlet::<Route> {}
        ScrollToTop {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_pages_round_trip_through_routes() {
        for entry in portfolio_core::nav::NAV_ENTRIES {
            let path = Route::for_page(entry.href).to_string();
            assert!(
                portfolio_core::nav::is_active_link(entry.href, &path),
                "{} -> {}",
                entry.href,
                path
            );
        }
    }
}
