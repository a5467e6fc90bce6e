#![no_main]

use libfuzzer_sys::fuzz_target;
use std::time::Duration;

use vitrine_core::carousel::{Carousel, ReviewSet};
use vitrine_core::deferred::ManualClock;
use vitrine_core::input::{InputEvent, InputRouter};
use vitrine_core::options::CarouselOptions;
use vitrine_core::position::Position;
use vitrine_core::surface::RecordingSurface;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the review count (1..=16), the rest are events.
    let len = usize::from(data[0] % 16) + 1;
    let clock = ManualClock::new();
    let mut carousel = Carousel::with_clock(
        ReviewSet::new((0..len).collect::<Vec<usize>>()).unwrap(),
        CarouselOptions::default(),
        RecordingSurface::new(),
        clock.clone(),
    );
    let mut router = InputRouter::new();

    for pair in data[1..].chunks(2) {
        let arg = pair.get(1).copied().unwrap_or(0);
        let event = match pair[0] % 7 {
            0 => InputEvent::Next,
            1 => InputEvent::Prev,
            2 => InputEvent::CardClick(usize::from(arg)),
            3 => InputEvent::DotClick(usize::from(arg)),
            4 => InputEvent::TouchStart(f32::from(arg)),
            5 => InputEvent::TouchEnd(f32::from(arg)),
            _ => {
                clock.advance(Duration::from_millis(u64::from(arg) * 10));
                carousel.tick();
                continue;
            }
        };
        router.dispatch(&mut carousel, event);

        assert!(carousel.cursor() < len);
        let positions = carousel.positions();
        assert_eq!(positions.iter().filter(|p| **p == Position::Center).count(), 1);
        assert_eq!(positions[carousel.cursor()], Position::Center);
        assert_eq!(carousel.surface().positions(), positions.as_slice());
        assert_eq!(carousel.surface().animation(), carousel.pending_animation());
    }
});
