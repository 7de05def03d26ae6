//! Resume download button.

use dioxus::prelude::*;
use portfolio_ui::{Button, ButtonVariant};

use crate::browser;
use crate::context::use_site_config;

/// Downloads the configured resume under its friendly file name.
#[component]
pub fn ResumeButton(#[props(default)] variant: ButtonVariant) -> Element {
    let config = use_site_config();
    let asset = config.resume.clone();

    rsx! {
        Button {
            variant,
            class: "resume-btn".to_string(),
            onclick: move |_| {
                if let Err(err) = browser::download(&asset) {
                    tracing::error!("Resume download failed: {}", err);
                }
            },
            "Download Resume"
        }
    }
}
