//! In-page anchor with smooth scrolling.

use dioxus::prelude::*;
use portfolio_core::scroll::fragment_target;

use crate::browser;

#[derive(Props, Clone, PartialEq)]
pub struct FragmentLinkProps {
    /// Link target; `#id` links scroll in place, anything else navigates
    pub href: String,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Anchor that smooth-scrolls to its `#fragment` target instead of jumping.
///
/// An unknown fragment does nothing.
#[component]
pub fn FragmentLink(props: FragmentLinkProps) -> Element {
    let href = props.href.clone();

    rsx! {
        a {
            href: "{props.href}",
            class: props.class.clone().unwrap_or_default(),
            onclick: move |evt: MouseEvent| {
                if !href.starts_with('#') {
                    return;
                }
                evt.prevent_default();
                match fragment_target(&href) {
                    Some(id) if browser::scroll_to_fragment(id) => {}
                    _ => tracing::debug!(href = %href, "No element for fragment link"),
                }
            },
            {props.children}
        }
    }
}
