//! # vitrine-core
//!
//! Client-side behaviour of the studio website: the review carousel
//! controller, bilingual text switching, and the offline asset cache policy.

pub mod carousel;
pub mod constants;
pub mod deferred;
pub mod input;
pub mod locale;
pub mod offline;
pub mod options;
pub mod position;
pub mod preferences;
pub mod review;
pub mod surface;

// Re-exports
pub use carousel::{Carousel, CarouselError, ReviewSet};
pub use constants::{exit_codes, DEFAULT_DEBOUNCE_MS, DEFAULT_SWIPE_THRESHOLD_PX};
pub use deferred::{Clock, DeferredReset, ManualClock, SystemClock};
pub use input::{InputEvent, InputRouter, SwipeTracker};
pub use locale::{Locale, LocaleController, StringTable};
pub use options::CarouselOptions;
pub use position::{AnimationDirection, Position};
pub use review::{DataError, Review};
pub use surface::{LoggingSurface, NoOpSurface, RecordingSurface, RenderSurface};

/// Build a carousel over the bundled reviews with default options.
///
/// Surface updates are emitted as `tracing` debug events.
///
/// # Example
/// ```
/// use vitrine_core::{AnimationDirection, Position};
///
/// let mut carousel = vitrine_core::carousel_with_defaults().unwrap();
/// carousel.step(AnimationDirection::Next);
/// assert_eq!(carousel.cursor(), 1);
/// assert_eq!(carousel.position_of(0), Some(Position::Left));
/// ```
pub fn carousel_with_defaults() -> Result<Carousel<Review, LoggingSurface>, CarouselError> {
    let reviews = ReviewSet::new(review::default_reviews())?;
    Ok(Carousel::new(reviews, CarouselOptions::default(), LoggingSurface))
}
