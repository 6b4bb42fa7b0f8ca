//! Mobile navigation menu and active-link tracking.

/// Header height assumed when the page cannot measure it.
pub const DEFAULT_HEADER_HEIGHT: f64 = 80.0;

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavMenuState {
    #[default]
    Closed,
    Open,
}

/// Mobile menu plus the currently highlighted nav link.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    state: NavMenuState,
    active_link: Option<String>,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavMenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == NavMenuState::Open
    }

    /// Body scrolling is locked while the menu covers the page.
    pub fn locks_body_scroll(&self) -> bool {
        self.is_open()
    }

    pub fn toggle(&mut self) -> NavMenuState {
        self.state = match self.state {
            NavMenuState::Closed => NavMenuState::Open,
            NavMenuState::Open => NavMenuState::Closed,
        };
        self.state
    }

    /// Close the menu. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = NavMenuState::Closed;
        was_open
    }

    pub fn active_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    /// Mark `href` active. Returns false when it already was.
    pub fn set_active(&mut self, href: &str) -> bool {
        if self.active_link.as_deref() == Some(href) {
            return false;
        }
        self.active_link = Some(href.to_string());
        true
    }
}

/// Whether `href` names an in-page section worth scrolling to.
pub fn is_section_anchor(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

/// Scroll target for a section so it clears the fixed header.
pub fn scroll_target(section_top: f64, header_height: Option<f64>) -> f64 {
    section_top - header_height.unwrap_or(DEFAULT_HEADER_HEIGHT)
}
