//! Carousel sizing and index arithmetic.
//!
//! The page owns a single [`CarouselState`]. It is built once from the card
//! count and viewport width, then recomputed in place on every resize.
//! After any mutation `current_index <= max_index` holds.

use std::fmt;

/// A viewport-width band that selects card size and visible count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// `width <= 480`
    Phone,
    /// `width <= 768`
    Tablet,
    /// `width <= 1024`
    Laptop,
    /// anything wider
    Desktop,
}

impl Breakpoint {
    /// Band containing `viewport_width`.
    pub fn for_width(viewport_width: u32) -> Self {
        match viewport_width {
            0..=480 => Breakpoint::Phone,
            481..=768 => Breakpoint::Tablet,
            769..=1024 => Breakpoint::Laptop,
            _ => Breakpoint::Desktop,
        }
    }

    /// Card width plus the 24px gap.
    pub fn card_width(self) -> u32 {
        match self {
            Breakpoint::Phone => 244,
            Breakpoint::Tablet => 274,
            Breakpoint::Laptop | Breakpoint::Desktop => 304,
        }
    }

    /// Cards on screen, capped by the number of cards that exist. The phone
    /// band always reports one card.
    pub fn visible_cards(self, total_cards: usize) -> f64 {
        let total = total_cards as f64;
        match self {
            Breakpoint::Phone => 1.0,
            Breakpoint::Tablet => total.min(1.5),
            Breakpoint::Laptop => total.min(2.5),
            Breakpoint::Desktop => total.min(3.0),
        }
    }
}

/// Slide direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Prev => write!(f, "prev"),
            Direction::Next => write!(f, "next"),
        }
    }
}

/// Horizontal strip offset for `current_index`, in pixels.
pub fn offset(current_index: usize, card_width: u32) -> i64 {
    -(current_index as i64 * i64::from(card_width))
}

/// Scroll position and sizing of the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    current_index: usize,
    card_width: u32,
    visible_cards: f64,
    max_index: usize,
    total_cards: usize,
}

impl CarouselState {
    /// Initial state for `total_cards` cards at `viewport_width`.
    pub fn new(total_cards: usize, viewport_width: u32) -> Self {
        let mut state = Self {
            current_index: 0,
            card_width: Breakpoint::Desktop.card_width(),
            visible_cards: 0.0,
            max_index: 0,
            total_cards,
        };
        state.configure(total_cards, viewport_width);
        state
    }

    /// Recompute sizing for a new card count or viewport width.
    ///
    /// An index beyond the new `max_index` is clamped down; it is never
    /// raised.
    pub fn configure(&mut self, total_cards: usize, viewport_width: u32) -> &Self {
        let breakpoint = Breakpoint::for_width(viewport_width);

        self.total_cards = total_cards;
        self.card_width = breakpoint.card_width();
        self.visible_cards = breakpoint.visible_cards(total_cards);
        self.max_index = total_cards.saturating_sub(self.visible_cards.floor() as usize);

        if self.current_index > self.max_index {
            self.current_index = self.max_index;
        }

        tracing::debug!(
            "Carousel: {} cards, visible: {}, maxIndex: {}",
            self.total_cards,
            self.visible_cards,
            self.max_index
        );

        self
    }

    /// Step one card in `direction`; a no-op at either end.
    pub fn slide(&mut self, direction: Direction) -> usize {
        match direction {
            Direction::Prev if self.can_go_prev() => self.current_index -= 1,
            Direction::Next if self.can_go_next() => self.current_index += 1,
            _ => {}
        }
        self.current_index
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index < self.max_index
    }

    /// Current strip offset in pixels.
    pub fn offset(&self) -> i64 {
        offset(self.current_index, self.card_width)
    }

    /// CSS transform positioning the strip.
    pub fn transform(&self) -> String {
        format!("translateX({}px)", self.offset())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn card_width(&self) -> u32 {
        self.card_width
    }

    pub fn visible_cards(&self) -> f64 {
        self.visible_cards
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }
}
