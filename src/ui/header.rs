//! Site header appearance.

/// Scroll offset, in pixels, past which the header switches style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Named header styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    /// Plain surface colour at the top of the page
    #[default]
    Top,
    /// Translucent, blurred and shadowed once the page has scrolled
    Scrolled,
}

impl HeaderStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD {
            HeaderStyle::Scrolled
        } else {
            HeaderStyle::Top
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_threshold() {
        assert_eq!(HeaderStyle::for_scroll(0.0), HeaderStyle::Top);
        assert_eq!(HeaderStyle::for_scroll(50.0), HeaderStyle::Top);
        assert_eq!(HeaderStyle::for_scroll(50.5), HeaderStyle::Scrolled);
    }
}
