#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
mod content;
pub mod context;
mod pages;
mod relay;
mod reveal;
mod theme;

use std::sync::OnceLock;

use portfolio_core::diagnostics::welcome_banner;
use portfolio_core::{PortfolioError, SiteConfig};

/// Global site configuration, set once before launch
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (embedded override or defaults)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Defaults, overridden by the page's embedded JSON config if present.
fn load_config() -> (SiteConfig, Option<PortfolioError>) {
    match browser::embedded_config() {
        None => (SiteConfig::default(), None),
        Some(json) => match SiteConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(err) => (SiteConfig::default(), Some(err)),
        },
    }
}

fn main() {
    let (config, config_error) = load_config();

    if let Err(err) = dioxus::logger::init(config.log_level()) {
        gloo::console::error!(format!("Logger already initialized: {err}"));
    }

    if let Some(err) = config_error {
        tracing::warn!("Ignoring embedded site config: {}", err);
    }
    if config.relay.access_key.is_none() {
        tracing::warn!("No relay access key configured, the relay will reject submissions");
    }

    // No-op unless the page was reached through a form POST, which the
    // fetch-based contact form never does.
    if let Err(err) = browser::replace_history_entry() {
        tracing::debug!("Could not replace history entry: {}", err);
    }

    browser::print_banner(&welcome_banner(&config));

    tracing::info!(
        owner = %config.owner_name,
        relay = %config.relay.endpoint,
        "Starting portfolio"
    );
    let _ = SITE_CONFIG.set(config);

    dioxus::launch(app::App);
}
