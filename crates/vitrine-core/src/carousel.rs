//! The review carousel controller.
//!
//! A [`Carousel`] owns a fixed, non-empty [`ReviewSet`] and a single cursor.
//! Navigation moves the cursor, re-derives every card's [`Position`], tags the
//! track with an [`AnimationDirection`], and schedules one deferred clear of
//! that tag. A new move before the clear fires replaces the pending clear.

use std::time::Instant;

use tracing::debug;

use crate::deferred::{Clock, DeferredReset, SystemClock};
use crate::options::CarouselOptions;
use crate::position::{classify_all, AnimationDirection, Position};
use crate::surface::RenderSurface;

/// Errors raised by carousel construction and navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// No reviews to show; the widget should not be initialized.
    #[error("review set is empty")]
    Empty,

    /// An index outside `[0, len)` was passed to a navigation call.
    #[error("index {index} out of range for {len} reviews")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Fixed, ordered, non-empty list of review items.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSet<T> {
    items: Vec<T>,
}

#[allow(clippy::len_without_is_empty)]
impl<T> ReviewSet<T> {
    /// Wrap `items`. Fails with [`CarouselError::Empty`] when there are none.
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self { items })
    }

    /// Number of reviews (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn check(&self, index: usize) -> Result<(), CarouselError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(CarouselError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<'a, T> IntoIterator for &'a ReviewSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Cyclic review carousel.
pub struct Carousel<T, S, C = SystemClock> {
    reviews: ReviewSet<T>,
    cursor: usize,
    pending: Option<AnimationDirection>,
    reset: DeferredReset,
    options: CarouselOptions,
    surface: S,
    clock: C,
}

impl<T, S: RenderSurface> Carousel<T, S, SystemClock> {
    /// Create a carousel driven by the wall clock.
    pub fn new(reviews: ReviewSet<T>, options: CarouselOptions, surface: S) -> Self {
        Self::with_clock(reviews, options, surface, SystemClock)
    }
}

impl<T, S: RenderSurface, C: Clock> Carousel<T, S, C> {
    /// Create a carousel with an explicit clock. The cursor starts at 0 and
    /// the initial positions are pushed to the surface immediately.
    pub fn with_clock(
        reviews: ReviewSet<T>,
        options: CarouselOptions,
        surface: S,
        clock: C,
    ) -> Self {
        let mut carousel = Self {
            reviews,
            cursor: 0,
            pending: None,
            reset: DeferredReset::new(),
            options: options.normalize(),
            surface,
            clock,
        };
        carousel.render();
        carousel
    }

    /// Jump directly to `target`.
    ///
    /// Returns `Ok(false)` without touching anything when `target` is already
    /// centered. The animation direction follows the shorter way round; ties
    /// go to `Next`.
    pub fn go_to_index(&mut self, target: usize) -> Result<bool, CarouselError> {
        self.reviews.check(target)?;
        match AnimationDirection::between(self.cursor, target, self.len()) {
            Some(direction) => {
                self.navigate(target, direction);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Move one card forward or back, wrapping around the ends.
    ///
    /// The track is tagged with `direction` itself. With a single review this
    /// is a no-op and returns `false`.
    pub fn step(&mut self, direction: AnimationDirection) -> bool {
        let len = self.len();
        let target = match direction {
            AnimationDirection::Next => (self.cursor + 1) % len,
            AnimationDirection::Prev => (self.cursor + len - 1) % len,
        };
        if target == self.cursor {
            return false;
        }
        self.navigate(target, direction);
        true
    }

    /// Handle a click on the card at `index`.
    ///
    /// Only the cards beside the center navigate; the centered card and
    /// hidden cards ignore clicks.
    pub fn click_card(&mut self, index: usize) -> Result<bool, CarouselError> {
        self.reviews.check(index)?;
        let position = Position::classify(index, self.cursor, self.len());
        if !position.is_adjacent() {
            return Ok(false);
        }
        let direction = if position == Position::Right {
            AnimationDirection::Next
        } else {
            AnimationDirection::Prev
        };
        Ok(self.step(direction))
    }

    /// Handle a horizontal swipe of `delta_x` pixels (end minus start).
    ///
    /// A leftward swipe of at least `threshold` moves to the next card, a
    /// rightward one to the previous card. Shorter movements are ignored.
    pub fn on_swipe(&mut self, delta_x: f32, threshold: f32) -> bool {
        if delta_x <= -threshold {
            self.step(AnimationDirection::Next)
        } else if delta_x >= threshold {
            self.step(AnimationDirection::Prev)
        } else {
            false
        }
    }

    /// [`Self::on_swipe`] using the configured threshold.
    pub fn swipe(&mut self, delta_x: f32) -> bool {
        self.on_swipe(delta_x, self.options.swipe_threshold_px)
    }

    /// Clear the animation tag if its debounce window has elapsed.
    ///
    /// Returns `true` when the clear fired on this call.
    pub fn tick(&mut self) -> bool {
        if !self.reset.fire_if_due(self.clock.now()) {
            return false;
        }
        self.pending = None;
        self.surface.set_animation(None);
        true
    }

    /// Position of every card, in review order.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        classify_all(self.cursor, self.len())
    }

    /// Position of a single card.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<Position> {
        (index < self.len()).then(|| Position::classify(index, self.cursor, self.len()))
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The centered review.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.reviews.as_slice()[self.cursor]
    }

    #[must_use]
    pub fn pending_animation(&self) -> Option<AnimationDirection> {
        self.pending
    }

    /// When the pending animation tag will be cleared.
    #[must_use]
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset.deadline()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Always `false`: a carousel cannot be built without reviews.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn reviews(&self) -> &ReviewSet<T> {
        &self.reviews
    }

    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Re-push the current positions and animation tag to the surface.
    pub fn render(&mut self) {
        let positions = self.positions();
        self.surface.render_positions(&positions, self.cursor);
        self.surface.set_animation(self.pending);
    }

    fn navigate(&mut self, target: usize, direction: AnimationDirection) {
        // Let an overdue clear land before the next tag goes up.
        self.tick();

        let from = self.cursor;
        self.cursor = target;
        self.pending = Some(direction);

        let positions = self.positions();
        self.surface.render_positions(&positions, self.cursor);
        self.surface.set_animation(Some(direction));

        let rescheduled = self.reset.schedule(self.clock.now(), self.options.debounce());
        debug!(
            from,
            to = target,
            direction = %direction,
            rescheduled,
            "Carousel moved"
        );
    }
}

impl<T, S, C> std::fmt::Debug for Carousel<T, S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("len", &self.reviews.len())
            .field("cursor", &self.cursor)
            .field("pending", &self.pending)
            .field("reset", &self.reset)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::deferred::ManualClock;
    use crate::surface::{RecordingSurface, SurfaceEvent};
    use AnimationDirection::{Next, Prev};
    use Position::{Center, Hidden, Left, Right};

    type TestCarousel = Carousel<u32, RecordingSurface, ManualClock>;

    fn make(n: u32) -> (TestCarousel, ManualClock) {
        let clock = ManualClock::new();
        let reviews = ReviewSet::new((0..n).collect()).unwrap();
        let carousel = Carousel::with_clock(
            reviews,
            CarouselOptions::default(),
            RecordingSurface::new(),
            clock.clone(),
        );
        (carousel, clock)
    }

    #[test]
    fn empty_set_rejected() {
        assert_eq!(ReviewSet::<u32>::new(Vec::new()), Err(CarouselError::Empty));
    }

    #[test]
    fn initial_render() {
        let (carousel, _clock) = make(4);
        assert_eq!(carousel.cursor(), 0);
        assert_eq!(carousel.surface().positions(), &[Center, Right, Hidden, Left]);
        assert!(carousel.pending_animation().is_none());
        assert!(carousel.reset_deadline().is_none());
    }

    #[test]
    fn click_right_then_center() {
        let (mut carousel, _clock) = make(4);
        assert_eq!(carousel.click_card(1), Ok(true));
        assert_eq!(carousel.cursor(), 1);
        assert_eq!(carousel.pending_animation(), Some(Next));
        assert_eq!(carousel.surface().positions(), &[Left, Center, Right, Hidden]);

        carousel.surface_mut().reset_events();
        assert_eq!(carousel.click_card(1), Ok(false));
        assert_eq!(carousel.cursor(), 1);
        assert!(carousel.surface().events().is_empty());
    }

    #[test]
    fn click_left_steps_back() {
        let (mut carousel, _clock) = make(4);
        assert_eq!(carousel.click_card(3), Ok(true));
        assert_eq!(carousel.cursor(), 3);
        assert_eq!(carousel.pending_animation(), Some(Prev));
    }

    #[test]
    fn click_hidden_is_noop() {
        let (mut carousel, _clock) = make(5);
        assert_eq!(carousel.click_card(2), Ok(false));
        assert_eq!(carousel.click_card(3), Ok(false));
        assert_eq!(carousel.cursor(), 0);
    }

    #[test]
    fn click_out_of_range() {
        let (mut carousel, _clock) = make(3);
        assert_eq!(
            carousel.click_card(3),
            Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn step_directions_five_items() {
        let (mut carousel, _clock) = make(5);
        assert!(carousel.step(Next));
        assert_eq!(carousel.cursor(), 1);
        assert_eq!(carousel.pending_animation(), Some(Next));

        let (mut carousel, _clock) = make(5);
        assert!(carousel.step(Prev));
        assert_eq!(carousel.cursor(), 4);
        assert_eq!(carousel.pending_animation(), Some(Prev));
    }

    #[test]
    fn go_to_index_jumps_directly() {
        let (mut carousel, _clock) = make(6);
        assert_eq!(carousel.go_to_index(3), Ok(true));
        assert_eq!(carousel.cursor(), 3);
        assert_eq!(carousel.pending_animation(), Some(Next));
        // Exactly one positions render for the jump, not three.
        let renders = carousel
            .surface()
            .events()
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Positions { .. }))
            .count();
        assert_eq!(renders, 2);

        assert_eq!(carousel.go_to_index(0), Ok(true));
        assert_eq!(carousel.pending_animation(), Some(Next));
        assert_eq!(carousel.go_to_index(4), Ok(true));
        assert_eq!(carousel.pending_animation(), Some(Prev));
    }

    #[test]
    fn go_to_current_is_noop() {
        let (mut carousel, _clock) = make(4);
        carousel.surface_mut().reset_events();
        assert_eq!(carousel.go_to_index(0), Ok(false));
        assert!(carousel.pending_animation().is_none());
        assert!(carousel.surface().events().is_empty());
    }

    #[test]
    fn go_to_out_of_range() {
        let (mut carousel, _clock) = make(4);
        assert_eq!(
            carousel.go_to_index(7),
            Err(CarouselError::IndexOutOfRange { index: 7, len: 4 })
        );
        assert_eq!(carousel.cursor(), 0);
    }

    #[test]
    fn swipe_threshold() {
        let (mut carousel, _clock) = make(4);
        assert!(!carousel.on_swipe(-49.0, 50.0));
        assert_eq!(carousel.cursor(), 0);
        assert!(carousel.on_swipe(-51.0, 50.0));
        assert_eq!(carousel.cursor(), 1);
        assert!(carousel.on_swipe(50.0, 50.0));
        assert_eq!(carousel.cursor(), 0);
        assert!(!carousel.swipe(10.0));
    }

    #[test]
    fn animation_cleared_after_window() {
        let (mut carousel, clock) = make(4);
        carousel.step(Next);
        clock.advance(Duration::from_millis(699));
        assert!(!carousel.tick());
        assert_eq!(carousel.pending_animation(), Some(Next));

        clock.advance(Duration::from_millis(1));
        assert!(carousel.tick());
        assert!(carousel.pending_animation().is_none());
        assert!(carousel.surface().animation().is_none());
        assert!(!carousel.tick());
    }

    #[test]
    fn rapid_steps_collapse_to_one_clear() {
        let (mut carousel, clock) = make(5);
        carousel.step(Next);
        clock.advance(Duration::from_millis(300));
        carousel.step(Next);
        assert_eq!(carousel.cursor(), 2);

        // First window would have ended here, but it was rescheduled.
        clock.advance(Duration::from_millis(500));
        assert!(!carousel.tick());
        assert_eq!(carousel.pending_animation(), Some(Next));

        clock.advance(Duration::from_millis(200));
        assert!(carousel.tick());
        clock.advance(Duration::from_secs(5));
        assert!(!carousel.tick());
        assert_eq!(carousel.surface().clear_count(), 1);
    }

    #[test]
    fn overdue_clear_lands_before_next_move() {
        let (mut carousel, clock) = make(3);
        carousel.step(Next);
        clock.advance(Duration::from_secs(1));
        carousel.step(Prev);
        assert_eq!(carousel.surface().clear_count(), 1);
        assert_eq!(carousel.pending_animation(), Some(Prev));
    }

    #[test]
    fn single_item_never_moves() {
        let (mut carousel, _clock) = make(1);
        assert!(!carousel.step(Next));
        assert!(!carousel.step(Prev));
        assert_eq!(carousel.click_card(0), Ok(false));
        assert!(!carousel.on_swipe(-500.0, 50.0));
        assert_eq!(carousel.positions(), vec![Center]);
        assert!(carousel.pending_animation().is_none());
    }

    #[test]
    fn two_items_neighbour_clicks_forward() {
        let (mut carousel, _clock) = make(2);
        assert_eq!(carousel.positions(), vec![Center, Right]);
        assert_eq!(carousel.click_card(1), Ok(true));
        assert_eq!(carousel.pending_animation(), Some(Next));
        assert_eq!(carousel.positions(), vec![Right, Center]);
    }

    #[test]
    fn two_items_step_prev_tags_prev() {
        let (mut carousel, _clock) = make(2);
        assert!(carousel.step(Prev));
        assert_eq!(carousel.cursor(), 1);
        assert_eq!(carousel.pending_animation(), Some(Prev));
        assert_eq!(carousel.surface().animation(), Some(Prev));
        // A dot jump over the same distance goes forward.
        let (mut carousel, _clock) = make(2);
        assert_eq!(carousel.go_to_index(1), Ok(true));
        assert_eq!(carousel.pending_animation(), Some(Next));
    }

    #[test]
    fn huge_clock_jump_clears_without_panicking() {
        let (mut carousel, clock) = make(3);
        carousel.step(Next);
        clock.advance(Duration::from_secs(u64::MAX / 2));
        assert!(carousel.tick());
        assert!(carousel.pending_animation().is_none());
        assert!(carousel.step(Next));
        assert_eq!(carousel.cursor(), 2);
    }

    #[test]
    fn current_and_position_of() {
        let (mut carousel, _clock) = make(4);
        carousel.step(Prev);
        assert_eq!(*carousel.current(), 3);
        assert_eq!(carousel.position_of(0), Some(Right));
        assert_eq!(carousel.position_of(9), None);
    }

    #[test]
    fn independent_instances() {
        let (mut a, _ca) = make(4);
        let (b, _cb) = make(4);
        a.step(Next);
        assert_eq!(a.cursor(), 1);
        assert_eq!(b.cursor(), 0);
        assert!(b.pending_animation().is_none());
    }
}
