//! Scroll-driven controls: the scroll-to-top button and in-page anchors.

/// Glyph on the scroll-to-top button
pub const SCROLL_TOP_GLYPH: &str = "\u{2191}";

/// Fixed styling of the scroll-to-top button, before visibility/elevation
pub const SCROLL_TOP_BASE_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; \
    width: 50px; height: 50px; background: var(--primary-color); color: white; \
    border: none; border-radius: 50%; font-size: 1.5rem; cursor: pointer; \
    z-index: 999; transition: all 0.3s ease;";

/// Scroll-to-top button visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollTopVisibility {
    #[default]
    Hidden,
    Visible,
}

impl ScrollTopVisibility {
    /// Visible strictly past `threshold`, no hysteresis band.
    pub fn from_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            ScrollTopVisibility::Visible
        } else {
            ScrollTopVisibility::Hidden
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            ScrollTopVisibility::Hidden => "none",
            ScrollTopVisibility::Visible => "block",
        }
    }
}

/// Hover lift of the scroll-to-top button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Elevation {
    #[default]
    Resting,
    Raised,
}

impl Elevation {
    pub fn transform(&self) -> &'static str {
        match self {
            Elevation::Resting => "translateY(0)",
            Elevation::Raised => "translateY(-5px)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            Elevation::Resting => "0 5px 15px rgba(0,0,0,0.3)",
            Elevation::Raised => "0 10px 25px rgba(0,0,0,0.4)",
        }
    }
}

/// Full inline style of the scroll-to-top button
pub fn scroll_top_style(visibility: ScrollTopVisibility, elevation: Elevation) -> String {
    format!(
        "{SCROLL_TOP_BASE_STYLE} display: {}; transform: {}; box-shadow: {};",
        visibility.display(),
        elevation.transform(),
        elevation.box_shadow()
    )
}

/// Element id targeted by an in-page anchor, `None` for other links.
///
/// A bare `#` names no element.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_exactly_past_threshold() {
        assert_eq!(ScrollTopVisibility::from_offset(300.0, 300.0), ScrollTopVisibility::Hidden);
        assert_eq!(ScrollTopVisibility::from_offset(300.1, 300.0), ScrollTopVisibility::Visible);
        assert_eq!(ScrollTopVisibility::from_offset(299.0, 300.0), ScrollTopVisibility::Hidden);
    }

    #[test]
    fn no_hysteresis_when_scrolling_back() {
        let offsets = [0.0, 200.0, 301.0, 450.0, 300.0, 301.0, 10.0];
        let states: Vec<_> = offsets
            .iter()
            .map(|y| ScrollTopVisibility::from_offset(*y, 300.0))
            .collect();
        use ScrollTopVisibility::*;
        assert_eq!(states, vec![Hidden, Hidden, Visible, Visible, Hidden, Visible, Hidden]);
    }

    #[test]
    fn style_reflects_state() {
        let style = scroll_top_style(ScrollTopVisibility::Visible, Elevation::Raised);
        assert!(style.contains("display: block;"));
        assert!(style.contains("translateY(-5px)"));
        assert!(style.contains("0 10px 25px rgba(0,0,0,0.4)"));

        let style = scroll_top_style(ScrollTopVisibility::Hidden, Elevation::Resting);
        assert!(style.contains("display: none;"));
        assert!(style.contains("translateY(0)"));
    }

    #[test]
    fn fragment_targets() {
        assert_eq!(fragment_target("#skills"), Some("skills"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("about.html"), None);
        assert_eq!(fragment_target("about.html#skills"), None);
    }
}
