//! Startup console banner.

use crate::config::SiteConfig;

/// One styled console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLine {
    pub text: String,
    /// CSS applied through the console's `%c` directive
    pub style: &'static str,
}

impl BannerLine {
    /// Format string for a styled console call
    pub fn format(&self) -> String {
        format!("%c{}", self.text)
    }
}

/// Greeting printed to the developer console once the page starts.
pub fn welcome_banner(config: &SiteConfig) -> Vec<BannerLine> {
    vec![
        BannerLine {
            text: format!("\u{1F44B} Welcome to {}'s Portfolio!", config.owner_name),
            style: "color: #2563eb; font-size: 20px; font-weight: bold;",
        },
        BannerLine {
            text: "Interested in collaborating? Feel free to reach out!".to_string(),
            style: "color: #64748b; font-size: 14px;",
        },
        BannerLine {
            text: format!("\u{1F4E7} {}", config.contact_email),
            style: "color: #2563eb; font-size: 14px;",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_mentions_owner_and_email() {
        let config = SiteConfig::default();
        let banner = welcome_banner(&config);

        assert_eq!(banner.len(), 3);
        assert!(banner[0].text.contains("Ajith Sakthivel's Portfolio"));
        assert_eq!(banner[2].format(), format!("%c\u{1F4E7} {}", config.contact_email));
    }
}
