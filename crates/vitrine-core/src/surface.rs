//! Render surfaces: pure projections of carousel state into presentation.

use tracing::debug;

use crate::position::{AnimationDirection, Position};

/// Receives the carousel's derived presentation state.
///
/// A surface holds no navigation state of its own; it is told what to show
/// after every change.
pub trait RenderSurface {
    /// Every card's position, in review order, plus the centered index.
    fn render_positions(&mut self, positions: &[Position], cursor: usize);

    /// Track-level transition tag. `None` clears it.
    fn set_animation(&mut self, direction: Option<AnimationDirection>);
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn render_positions(&mut self, positions: &[Position], cursor: usize) {
        (**self).render_positions(positions, cursor);
    }

    fn set_animation(&mut self, direction: Option<AnimationDirection>) {
        (**self).set_animation(direction);
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn render_positions(&mut self, positions: &[Position], cursor: usize) {
        (**self).render_positions(positions, cursor);
    }

    fn set_animation(&mut self, direction: Option<AnimationDirection>) {
        (**self).set_animation(direction);
    }
}

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Positions { positions: Vec<Position>, cursor: usize },
    Animation(Option<AnimationDirection>),
}

/// Surface that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSurface;

impl NoOpSurface {
    /// Create a new no-op surface.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RenderSurface for NoOpSurface {
    fn render_positions(&mut self, _positions: &[Position], _cursor: usize) {}

    fn set_animation(&mut self, _direction: Option<AnimationDirection>) {}
}

/// Surface that keeps a log of every call and the latest projected state.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
    positions: Vec<Position>,
    animation: Option<AnimationDirection>,
    clears: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls in arrival order.
    #[must_use]
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Latest positions received.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Latest animation tag received.
    #[must_use]
    pub fn animation(&self) -> Option<AnimationDirection> {
        self.animation
    }

    /// Number of times a set animation tag was cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Forget recorded events and clears, keeping the latest state.
    pub fn reset_events(&mut self) {
        self.events.clear();
        self.clears = 0;
    }
}

impl RenderSurface for RecordingSurface {
    fn render_positions(&mut self, positions: &[Position], cursor: usize) {
        self.positions = positions.to_vec();
        self.events.push(SurfaceEvent::Positions {
            positions: positions.to_vec(),
            cursor,
        });
    }

    fn set_animation(&mut self, direction: Option<AnimationDirection>) {
        if direction.is_none() && self.animation.is_some() {
            self.clears += 1;
        }
        self.animation = direction;
        self.events.push(SurfaceEvent::Animation(direction));
    }
}

/// Surface that emits a `tracing` event per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSurface;

impl RenderSurface for LoggingSurface {
    fn render_positions(&mut self, positions: &[Position], cursor: usize) {
        let classes: Vec<&str> = positions.iter().map(|p| p.css_class()).collect();
        debug!(cursor, positions = ?classes, "Carousel positions");
    }

    fn set_animation(&mut self, direction: Option<AnimationDirection>) {
        debug!(
            animation = direction.map_or("none", AnimationDirection::css_class),
            "Carousel animation tag"
        );
    }
}
