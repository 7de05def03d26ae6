//! Form-wide feedback banner shown after a submission.

use dioxus::prelude::*;
use portfolio_core::contact::FormMessage;

/// Renders `#formMessage`, hidden while there is nothing to say.
#[component]
pub fn FormMessageBanner(message: Option<FormMessage>) -> Element {
    let (class, display, text) = match &message {
        Some(msg) => (msg.kind.class(), "block", msg.text.as_str()),
        None => ("form-message", "none", ""),
    };

    rsx! {
        div {
            id: "formMessage",
            class: "{class}",
            style: "display: {display};",
            "role": "status",
            "{text}"
        }
    }
}
