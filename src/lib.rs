//! VYSE site core - interaction logic for the VYSE marketing site.
//!
//! The page scripts keep no global state of their own; everything lives in a
//! [`Page`] that turns DOM-originated events into declarative effects.
//!
//! # Architecture
//!
//! - **carousel**: breakpoint sizing, index bounds, swipe and key mapping
//! - **domain**: validated value objects for the contact form fields
//! - **form**: field capture, validation, submission strategies, lifecycle
//! - **client**: HTTP client for the form relay endpoint
//! - **page**: event wiring that owns the single mutable page state
//! - **ui**: named visual states (nav menu, header, control affordances)
//! - **config**, **error**, **metrics**: ambient plumbing

pub mod carousel;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod page;
pub mod ui;

pub use carousel::{offset, CarouselState, Direction, Swipe};
pub use client::{RelayClient, RelaySubmitter};
pub use config::{Config, SubmissionMode};
pub use error::{ConfigError, FormError, RelayError, SubmitError};
pub use form::{
    validate, ContactForm, FormFields, FormNotice, SimulatedSubmitter, SubmissionStrategy,
    ValidationReport,
};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use page::{Effect, Page, PageEvent, PageLayout};
