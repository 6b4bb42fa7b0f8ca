//! Industries carousel.
//!
//! - **state**: breakpoint sizing, index bounds and strip offset
//! - **gesture**: swipe and keyboard input mapped to slide directions

pub mod gesture;
pub mod state;

pub use gesture::{direction_for_key, Point, Swipe, SWIPE_THRESHOLD};
pub use state::{offset, Breakpoint, CarouselState, Direction};
