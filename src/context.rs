//! Shared page context.
//!
//! The root component provides the site config, the live scroll offset
//! and the reveal observers; components pick them up with the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In any component below App
//! let config = use_site_config();
//! let offset = use_scroll_offset();
//! let style = NavbarStyle::from_offset(offset(), config.navbar_scroll_threshold);
//! ```

use dioxus::prelude::*;
use portfolio_core::SiteConfig;

use crate::reveal::RevealGroups;

/// Window scroll offset, updated on every scroll event
#[derive(Clone, Copy)]
pub struct ScrollOffset(pub Signal<f64>);

/// Get the site configuration (set once at startup).
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Hook to access the site configuration from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to read the current scroll offset.
///
/// Reading the returned signal subscribes the component to scroll updates;
/// wrap derived state in `use_memo` to re-render only when it changes.
pub fn use_scroll_offset() -> Signal<f64> {
    use_context::<ScrollOffset>().0
}

/// Hook to access the shared reveal observers.
pub fn use_reveal_groups() -> RevealGroups {
    use_context::<RevealGroups>()
}
