//! Events the page receives and effects it asks the renderer to apply.

use crate::carousel::Swipe;
use crate::domain::Field;
use crate::form::{FormNotice, SubmitButton, SubmitOutcome};
use crate::ui::{Affordance, HeaderStyle, NavMenuState};
use std::time::Instant;

/// DOM-originated input, already reduced to plain data.
#[derive(Debug, Clone)]
pub enum PageEvent {
    /// Carousel "previous" button
    CarouselPrev,
    /// Carousel "next" button
    CarouselNext,
    /// Touch drag over the carousel
    Swipe(Swipe),
    /// Key press anywhere on the document
    Key { key: String, input_focused: bool },
    /// Window resized to `width`
    Resize { width: u32, at: Instant },
    /// Window scrolled to `y`
    Scroll { y: f64, at: Instant },
    /// Clock tick that flushes debounced work
    Tick { at: Instant },
    /// Hamburger button
    NavToggle,
    /// Key press while the hamburger button has focus
    NavToggleKey { key: String },
    /// Anchor link click; `section_top` is `None` when the target is missing
    NavLinkClicked {
        href: String,
        section_top: Option<f64>,
        header_height: Option<f64>,
    },
    /// Click outside the open menu and its toggle
    OutsideClick,
    /// A section with this id entered the viewport
    SectionVisible { id: String },
    /// Document visibility changed
    VisibilityChanged { hidden: bool },
    /// User typed into a contact form field
    FieldInput { field: Field, value: String },
    /// Contact form submit
    Submit,
    /// The in-flight submission resolved
    SubmissionFinished(SubmitOutcome),
}

/// A declarative instruction for the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Position the card strip at `offset` pixels
    CarouselTransform { offset: i64 },
    /// Enable or disable the carousel arrows
    CarouselControls { prev: Affordance, next: Affordance },
    NavMenu(NavMenuState),
    BodyScrollLock(bool),
    Header(HeaderStyle),
    ActiveNavLink(String),
    ScrollTo { top: f64 },
    FieldHighlight { field: Field, error: bool },
    Notice(FormNotice),
    SubmitButton(SubmitButton),
    ResetForm,
}
