//! Navigation bar state: scroll styling, mobile menu, active link.

/// Page a bare directory path resolves to
pub const DEFAULT_PAGE: &str = "index.html";

/// One entry of the site navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// Site navigation, in display order
pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry { label: "Home", href: "index.html" },
    NavEntry { label: "About", href: "about.html" },
    NavEntry { label: "Projects", href: "projects.html" },
    NavEntry { label: "Contact", href: "contact.html" },
];

/// Navbar look, a pure function of the scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarStyle {
    #[default]
    Top,
    Scrolled,
}

impl NavbarStyle {
    pub fn from_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavbarStyle::Scrolled
        } else {
            NavbarStyle::Top
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavbarStyle::Top => "navbar",
            NavbarStyle::Scrolled => "navbar scrolled",
        }
    }
}

/// Mobile menu open/closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Menu button clicked
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// A link inside the menu was followed
    pub fn link_followed(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Class list for an element carrying the open marker
    pub fn class(&self, base: &str) -> String {
        match self {
            MenuState::Open => format!("{base} active"),
            MenuState::Closed => base.to_string(),
        }
    }
}

/// File name of the page at `pathname`, `index.html` for directory paths.
pub fn current_page(pathname: &str) -> &str {
    pathname
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(DEFAULT_PAGE)
}

/// Whether a nav link pointing at `href` marks the page at `pathname`.
///
/// The site root counts as `index.html`.
pub fn is_active_link(href: &str, pathname: &str) -> bool {
    href == current_page(pathname)
}
