//! Site configuration.
//!
//! Every tunable constant the page behaviors rely on lives here: scroll
//! thresholds, reveal thresholds, timer delays, the form relay endpoint and
//! the fallback contact address. [`SiteConfig::default`] reproduces the
//! published site; a JSON document can override any subset of fields.
//!
//! ```
//! use portfolio_core::SiteConfig;
//!
//! let config = SiteConfig::from_json(r#"{ "scroll_top_threshold": 400.0 }"#).unwrap();
//! assert_eq!(config.scroll_top_threshold, 400.0);
//! assert_eq!(config.navbar_scroll_threshold, 50.0);
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use tracing::Level;

use crate::error::{PortfolioError, PortfolioResult};

/// Public form relay used by the contact form
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Address shown to visitors when the relay cannot deliver their message
pub const DEFAULT_CONTACT_EMAIL: &str = "sakthivelajith498@gmail.com";

/// Top-level configuration for the site
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name used in the console banner and page titles
    pub owner_name: String,
    /// Fallback address shown when submission fails
    pub contact_email: String,
    /// Contact form relay settings
    pub relay: RelayConfig,
    /// Scroll offset (px) past which the navbar gets its `scrolled` style
    pub navbar_scroll_threshold: f64,
    /// Scroll offset (px) past which the scroll-to-top button shows
    pub scroll_top_threshold: f64,
    /// Visible fraction required before a skill bar fills
    pub skill_reveal_threshold: f64,
    /// Visible fraction required before a card fades in
    pub fade_reveal_threshold: f64,
    /// Delay between priming a fade-in and starting its transition
    pub fade_in_delay_ms: u64,
    /// How long a success message stays on screen
    pub message_lifetime_ms: u64,
    /// Downloadable resume
    pub resume: ResumeAsset,
    /// Minimum tracing level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Ajith Sakthivel".to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            relay: RelayConfig::default(),
            navbar_scroll_threshold: 50.0,
            scroll_top_threshold: 300.0,
            skill_reveal_threshold: 0.5,
            fade_reveal_threshold: 0.1,
            fade_in_delay_ms: 100,
            message_lifetime_ms: 7000,
            resume: ResumeAsset::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PortfolioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would silently break a behavior.
    pub fn validate(&self) -> PortfolioResult<()> {
        if !self.relay.endpoint.starts_with("http://") && !self.relay.endpoint.starts_with("https://")
        {
            return Err(PortfolioError::Config(format!(
                "relay endpoint must be an http(s) URL, got {:?}",
                self.relay.endpoint
            )));
        }

        for (name, value) in [
            ("skill_reveal_threshold", self.skill_reveal_threshold),
            ("fade_reveal_threshold", self.fade_reveal_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PortfolioError::Config(format!(
                    "{name} must be within 0.0..=1.0, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("navbar_scroll_threshold", self.navbar_scroll_threshold),
            ("scroll_top_threshold", self.scroll_top_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PortfolioError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if Level::from_str(&self.log_level).is_err() {
            return Err(PortfolioError::Config(format!(
                "unknown log level {:?}",
                self.log_level
            )));
        }

        if self.contact_email.trim().is_empty() {
            return Err(PortfolioError::Config("contact_email is empty".to_string()));
        }

        Ok(())
    }

    /// Tracing level, falling back to `INFO` for unparseable values.
    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    pub fn fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.fade_in_delay_ms)
    }

    pub fn message_lifetime(&self) -> Duration {
        Duration::from_millis(self.message_lifetime_ms)
    }
}

/// Form relay settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Endpoint receiving the JSON POST
    pub endpoint: String,
    /// Relay access key, sent as the hidden `access_key` field
    pub access_key: Option<String>,
    /// Sender name the relay puts on the notification mail (`from_name`)
    pub from_name: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            access_key: None,
            from_name: Some("Portfolio Contact Form".to_string()),
        }
    }
}

impl RelayConfig {
    /// Hidden inputs rendered into the contact form.
    pub fn hidden_fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        if let Some(key) = &self.access_key {
            fields.insert("access_key".to_string(), key.clone());
        }
        if let Some(from) = &self.from_name {
            fields.insert("from_name".to_string(), from.clone());
        }
        fields
    }
}

/// Static resume file offered for download
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResumeAsset {
    /// Path of the file relative to the page
    pub href: String,
    /// Suggested name for the saved file
    pub file_name: String,
}

impl Default for ResumeAsset {
    fn default() -> Self {
        Self {
            href: "Ajith_python.pdf".to_string(),
            file_name: "Ajith_Sakthivel_Resume.pdf".to_string(),
        }
    }
}
