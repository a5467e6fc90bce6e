//! Input adapters: raw pointer/button events into carousel calls.
//!
//! Adapters never fail. Events that reference a card or dot that does not
//! exist, or a touch that never started, are logged and dropped.

use tracing::{trace, warn};

use crate::carousel::Carousel;
use crate::deferred::Clock;
use crate::position::AnimationDirection;
use crate::surface::RenderSurface;

/// An input event forwarded from the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Click on the review card at this index.
    CardClick(usize),
    /// Click on the pagination dot at this index.
    DotClick(usize),
    /// Previous-arrow button.
    Prev,
    /// Next-arrow button.
    Next,
    /// Touch began at this horizontal coordinate.
    TouchStart(f32),
    /// Touch ended at this horizontal coordinate.
    TouchEnd(f32),
}

/// Tracks the horizontal origin of an in-progress touch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where a touch began.
    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the touch and return `end - start`, or `None` if no touch was open.
    pub fn finish(&mut self, x: f32) -> Option<f32> {
        self.start_x.take().map(|start| x - start)
    }

    /// Whether a touch is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

/// Routes [`InputEvent`]s into one carousel.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputRouter {
    swipe: SwipeTracker,
}

impl InputRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `event` to `carousel`. Returns `true` when the cursor moved.
    pub fn dispatch<T, S, C>(&mut self, carousel: &mut Carousel<T, S, C>, event: InputEvent) -> bool
    where
        S: RenderSurface,
        C: Clock,
    {
        trace!(?event, "Carousel input");
        match event {
            InputEvent::CardClick(index) => carousel.click_card(index).unwrap_or_else(|err| {
                warn!(%err, "Ignoring card click");
                false
            }),
            InputEvent::DotClick(index) => carousel.go_to_index(index).unwrap_or_else(|err| {
                warn!(%err, "Ignoring dot click");
                false
            }),
            InputEvent::Prev => carousel.step(AnimationDirection::Prev),
            InputEvent::Next => carousel.step(AnimationDirection::Next),
            InputEvent::TouchStart(x) => {
                self.swipe.start(x);
                false
            }
            InputEvent::TouchEnd(x) => match self.swipe.finish(x) {
                Some(delta) => carousel.swipe(delta),
                None => {
                    warn!("Ignoring touch end without a touch start");
                    false
                }
            },
        }
    }

    /// Whether a touch is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.swipe.is_tracking()
    }
}
