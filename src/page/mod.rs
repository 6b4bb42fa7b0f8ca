//! Page event wiring.
//!
//! [`Page`] owns the only mutable copy of every piece of page state and is
//! driven one event at a time. It never touches the DOM: each call returns
//! the [`Effect`]s the renderer should apply.

pub mod events;

pub use events::{Effect, PageEvent};

use crate::carousel::{direction_for_key, CarouselState, Direction};
use crate::domain::Field;
use crate::error::FormError;
use crate::form::{ContactForm, PendingSubmission, SubmitOutcome};
use crate::ui::nav::{is_section_anchor, scroll_target};
use crate::ui::{
    Affordance, Debouncer, HeaderStyle, NavMenu, RESIZE_DEBOUNCE, SCROLL_DEBOUNCE,
};
use std::time::Instant;
use tracing::{debug, info};

/// What the page found when it loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Card count, or `None` when the carousel elements are missing
    pub carousel_cards: Option<usize>,
    pub viewport_width: u32,
}

/// All interactive state of the page.
pub struct Page {
    carousel: Option<CarouselState>,
    viewport_width: u32,
    nav: NavMenu,
    header: HeaderStyle,
    scroll_y: f64,
    resize: Debouncer,
    scroll: Debouncer,
    form: Option<ContactForm>,
    pending: Option<PendingSubmission>,
}

impl Page {
    pub fn new(layout: PageLayout, form: Option<ContactForm>) -> Self {
        let carousel = layout
            .carousel_cards
            .map(|cards| CarouselState::new(cards, layout.viewport_width));

        if carousel.is_none() {
            debug!("Carousel elements not found");
        }
        if form.is_none() {
            debug!("Contact form not found");
        }

        Self {
            carousel,
            viewport_width: layout.viewport_width,
            nav: NavMenu::new(),
            header: HeaderStyle::default(),
            scroll_y: 0.0,
            resize: Debouncer::new(RESIZE_DEBOUNCE),
            scroll: Debouncer::new(SCROLL_DEBOUNCE),
            form,
            pending: None,
        }
    }

    /// Effects that bring a freshly loaded page into its initial state.
    pub fn init(&self) -> Vec<Effect> {
        let mut effects = vec![Effect::Header(self.header)];
        effects.extend(self.carousel_effects());
        if let Some(form) = &self.form {
            effects.push(Effect::SubmitButton(form.button()));
        }
        info!("Page initialized");
        effects
    }

    pub fn carousel(&self) -> Option<&CarouselState> {
        self.carousel.as_ref()
    }

    pub fn nav(&self) -> &NavMenu {
        &self.nav
    }

    pub fn header(&self) -> HeaderStyle {
        self.header
    }

    pub fn form(&self) -> Option<&ContactForm> {
        self.form.as_ref()
    }

    /// Hand the submission started by the last `Submit` to the caller, who
    /// runs it and reports back with [`PageEvent::SubmissionFinished`].
    pub fn take_pending_submission(&mut self) -> Option<PendingSubmission> {
        self.pending.take()
    }

    /// Apply one event.
    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        match event {
            PageEvent::CarouselPrev => self.slide(Direction::Prev),
            PageEvent::CarouselNext => self.slide(Direction::Next),
            PageEvent::Swipe(swipe) => match swipe.direction() {
                Some(direction) => self.slide(direction),
                None => Vec::new(),
            },
            PageEvent::Key { key, input_focused } => self.key(&key, input_focused),
            PageEvent::Resize { width, at } => {
                self.viewport_width = width;
                self.resize.trigger(at);
                Vec::new()
            }
            PageEvent::Scroll { y, at } => {
                self.scroll_y = y;
                self.scroll.trigger(at);
                Vec::new()
            }
            PageEvent::Tick { at } => self.tick(at),
            PageEvent::NavToggle => self.toggle_nav(),
            PageEvent::NavToggleKey { key } => match key.as_str() {
                "Enter" | " " => self.toggle_nav(),
                _ => Vec::new(),
            },
            PageEvent::NavLinkClicked {
                href,
                section_top,
                header_height,
            } => self.nav_link(href, section_top, header_height),
            PageEvent::OutsideClick => self.close_nav(),
            PageEvent::SectionVisible { id } => self.activate(&format!("#{}", id)),
            PageEvent::VisibilityChanged { hidden } => {
                if hidden {
                    debug!("Page hidden");
                    Vec::new()
                } else {
                    debug!("Page visible, recomputing carousel");
                    self.recompute_carousel()
                }
            }
            PageEvent::FieldInput { field, value } => {
                let cleared = self
                    .form
                    .as_mut()
                    .is_some_and(|form| form.input(field, value));
                if cleared {
                    vec![Effect::FieldHighlight {
                        field,
                        error: false,
                    }]
                } else {
                    Vec::new()
                }
            }
            PageEvent::Submit => self.submit(),
            PageEvent::SubmissionFinished(outcome) => self.finish_submission(outcome),
        }
    }

    fn carousel_effects(&self) -> Vec<Effect> {
        match &self.carousel {
            Some(carousel) => vec![
                Effect::CarouselTransform {
                    offset: carousel.offset(),
                },
                Effect::CarouselControls {
                    prev: Affordance::from_enabled(carousel.can_go_prev()),
                    next: Affordance::from_enabled(carousel.can_go_next()),
                },
            ],
            None => Vec::new(),
        }
    }

    fn slide(&mut self, direction: Direction) -> Vec<Effect> {
        let Some(carousel) = self.carousel.as_mut() else {
            return Vec::new();
        };

        let before = carousel.current_index();
        let after = carousel.slide(direction);
        debug!(
            "Slide carousel: {}, index {} -> {}, maxIndex: {}",
            direction,
            before,
            after,
            carousel.max_index()
        );

        if before == after {
            Vec::new()
        } else {
            self.carousel_effects()
        }
    }

    fn recompute_carousel(&mut self) -> Vec<Effect> {
        let width = self.viewport_width;
        match self.carousel.as_mut() {
            Some(carousel) => {
                let cards = carousel.total_cards();
                carousel.configure(cards, width);
                self.carousel_effects()
            }
            None => Vec::new(),
        }
    }

    fn key(&mut self, key: &str, input_focused: bool) -> Vec<Effect> {
        if key == "Escape" {
            return self.close_nav();
        }
        match direction_for_key(key, input_focused) {
            Some(direction) => self.slide(direction),
            None => Vec::new(),
        }
    }

    fn tick(&mut self, at: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();

        if self.resize.poll(at) {
            effects.extend(self.recompute_carousel());
        }

        if self.scroll.poll(at) {
            let style = HeaderStyle::for_scroll(self.scroll_y);
            if style != self.header {
                self.header = style;
                effects.push(Effect::Header(style));
            }
        }

        effects
    }

    fn toggle_nav(&mut self) -> Vec<Effect> {
        let state = self.nav.toggle();
        vec![
            Effect::NavMenu(state),
            Effect::BodyScrollLock(self.nav.locks_body_scroll()),
        ]
    }

    fn close_nav(&mut self) -> Vec<Effect> {
        if self.nav.close() {
            vec![
                Effect::NavMenu(self.nav.state()),
                Effect::BodyScrollLock(false),
            ]
        } else {
            Vec::new()
        }
    }

    fn activate(&mut self, href: &str) -> Vec<Effect> {
        if self.nav.set_active(href) {
            vec![Effect::ActiveNavLink(href.to_string())]
        } else {
            Vec::new()
        }
    }

    fn nav_link(
        &mut self,
        href: String,
        section_top: Option<f64>,
        header_height: Option<f64>,
    ) -> Vec<Effect> {
        if !is_section_anchor(&href) {
            return Vec::new();
        }
        let Some(top) = section_top else {
            return Vec::new();
        };

        let mut effects = vec![Effect::ScrollTo {
            top: scroll_target(top, header_height),
        }];
        effects.extend(self.close_nav());
        effects.extend(self.activate(&href));
        effects
    }

    fn submit(&mut self) -> Vec<Effect> {
        let Some(form) = self.form.as_mut() else {
            return Vec::new();
        };

        match form.begin() {
            Ok(pending) => {
                self.pending = Some(pending);
                let mut effects: Vec<Effect> = Field::ALL
                    .into_iter()
                    .map(|field| Effect::FieldHighlight {
                        field,
                        error: false,
                    })
                    .collect();
                effects.push(Effect::SubmitButton(form.button()));
                effects
            }
            Err(err) => {
                let mut effects = Vec::new();
                if let FormError::Invalid(report) = &err {
                    effects.extend(Field::ALL.into_iter().map(|field| Effect::FieldHighlight {
                        field,
                        error: report.has_error_for(field),
                    }));
                }
                if let Some(notice) = form.notice_for(&err) {
                    effects.push(Effect::Notice(notice));
                }
                effects
            }
        }
    }

    fn finish_submission(&mut self, outcome: SubmitOutcome) -> Vec<Effect> {
        let Some(form) = self.form.as_mut() else {
            return Vec::new();
        };

        let succeeded = outcome.is_ok();
        let Some(notice) = form.finish(outcome) else {
            return Vec::new();
        };
        let mut effects = Vec::new();
        if succeeded {
            effects.push(Effect::ResetForm);
        }
        effects.push(Effect::SubmitButton(form.button()));
        effects.push(Effect::Notice(notice));
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn page(cards: Option<usize>, width: u32) -> Page {
        Page::new(
            PageLayout {
                carousel_cards: cards,
                viewport_width: width,
            },
            None,
        )
    }

    #[test]
    fn test_init_positions_carousel() {
        let page = page(Some(6), 1440);
        let effects = page.init();
        assert!(effects.contains(&Effect::CarouselTransform { offset: 0 }));
        assert!(effects.contains(&Effect::CarouselControls {
            prev: Affordance::Disabled,
            next: Affordance::Enabled,
        }));
    }

    #[test]
    fn test_missing_carousel_is_noop() {
        let mut page = page(None, 1440);
        assert!(page.handle(PageEvent::CarouselNext).is_empty());
        assert!(page.carousel().is_none());
    }

    #[test]
    fn test_slide_at_edge_emits_nothing() {
        let mut page = page(Some(6), 1440);
        assert!(page.handle(PageEvent::CarouselPrev).is_empty());
        assert_eq!(page.handle(PageEvent::CarouselNext).len(), 2);
    }

    #[test]
    fn test_scroll_is_debounced() {
        let mut page = page(None, 1440);
        let start = Instant::now();

        page.handle(PageEvent::Scroll { y: 120.0, at: start });
        assert!(page.handle(PageEvent::Tick { at: start }).is_empty());

        let effects = page.handle(PageEvent::Tick {
            at: start + Duration::from_millis(10),
        });
        assert_eq!(effects, vec![Effect::Header(HeaderStyle::Scrolled)]);
        assert_eq!(page.header(), HeaderStyle::Scrolled);
    }
}
