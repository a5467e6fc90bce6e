//! Clocks and the single-slot deferred reset used to clear animation tags.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock.
///
/// Clones share the same offset, so a test can keep one handle while the
/// controller owns another.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use vitrine_core::deferred::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// let start = clock.now();
/// handle.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move time forward.
    ///
    /// Saturates at the latest instant the platform can represent from the
    /// origin instead of overflowing.
    pub fn advance(&self, by: Duration) {
        let mut by = by;
        let offset = self.offset.get();
        loop {
            let next = offset.saturating_add(by);
            if self.origin.checked_add(next).is_some() {
                self.offset.set(next);
                return;
            }
            by /= 2;
        }
    }

    /// Time elapsed since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        // `advance` keeps `origin + offset` representable.
        self.origin
            .checked_add(self.offset.get())
            .unwrap_or(self.origin)
    }
}

/// A single pending deferred action.
///
/// Scheduling always replaces whatever was pending, so at most one deadline
/// exists at a time and a late deadline can never fire after a newer one was
/// installed.
#[derive(Debug, Clone, Default)]
pub struct DeferredReset {
    deadline: Option<Instant>,
}

impl DeferredReset {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Cancel any pending deadline and install `now + delay`.
    ///
    /// A deadline past the clock's range is never due. Returns `true` when a
    /// pending deadline was replaced.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> bool {
        let replaced = self.deadline.is_some();
        self.deadline = now.checked_add(delay);
        replaced
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Consume the deadline if it has passed. Fires at most once per schedule.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
