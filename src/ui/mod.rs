//! Declarative visual state for the page chrome.
//!
//! Nothing in here touches the DOM. Each type describes a named visual state
//! that the rendering collaborator maps onto CSS classes.

pub mod affordance;
pub mod debounce;
pub mod header;
pub mod nav;

pub use affordance::Affordance;
pub use debounce::{Debouncer, RESIZE_DEBOUNCE, SCROLL_DEBOUNCE};
pub use header::{HeaderStyle, HEADER_SCROLL_THRESHOLD};
pub use nav::{NavMenu, NavMenuState, DEFAULT_HEADER_HEIGHT};
