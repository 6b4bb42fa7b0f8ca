//! Input mapping for the carousel.

use super::state::Direction;

/// Minimum horizontal travel, in CSS pixels, for a swipe to count.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// A point in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A completed touch drag from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub start: Point,
    pub end: Point,
}

impl Swipe {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Direction the drag asks for, if it is a horizontal swipe.
    ///
    /// Dragging right reveals earlier cards (`Prev`), dragging left reveals
    /// later ones (`Next`). Mostly-vertical drags are page scrolls and map to
    /// nothing.
    pub fn direction(&self) -> Option<Direction> {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;

        if dx.abs() > dy.abs() && dx.abs() > SWIPE_THRESHOLD {
            if dx > 0.0 {
                Some(Direction::Prev)
            } else {
                Some(Direction::Next)
            }
        } else {
            None
        }
    }
}

/// Arrow-key navigation; only applies when no form control has focus.
pub fn direction_for_key(key: &str, input_focused: bool) -> Option<Direction> {
    if input_focused {
        return None;
    }
    match key {
        "ArrowLeft" => Some(Direction::Prev),
        "ArrowRight" => Some(Direction::Next),
        _ => None,
    }
}
