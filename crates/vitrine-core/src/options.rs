//! Carousel options.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_SWIPE_THRESHOLD_PX, MAX_DEBOUNCE_MS};

/// Tunables for one carousel widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    /// How long the animation tag stays on the track after a move (ms).
    pub debounce_ms: u64,
    /// Minimum horizontal swipe distance in pixels.
    pub swipe_threshold_px: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl CarouselOptions {
    /// Normalize options, applying defaults where values are zero or unusable.
    /// Debounce windows longer than [`MAX_DEBOUNCE_MS`] are clamped.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.debounce_ms == 0 {
            self.debounce_ms = DEFAULT_DEBOUNCE_MS;
        }
        self.debounce_ms = self.debounce_ms.min(MAX_DEBOUNCE_MS);
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px <= 0.0 {
            self.swipe_threshold_px = DEFAULT_SWIPE_THRESHOLD_PX;
        }
        self
    }

    /// Debounce window as a [`Duration`].
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
