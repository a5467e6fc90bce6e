//! Golden file integration tests.
//!
//! Reads tests/testdata/carousel_golden.json and replays every scenario on a
//! fresh carousel, checking the cursor, positions, and animation tag.

use std::time::Duration;

use serde::Deserialize;

use vitrine_core::carousel::{Carousel, ReviewSet};
use vitrine_core::deferred::ManualClock;
use vitrine_core::options::CarouselOptions;
use vitrine_core::position::{AnimationDirection, Position};
use vitrine_core::surface::RecordingSurface;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    len: usize,
    actions: Vec<String>,
    cursor: usize,
    positions: Vec<Position>,
    animation: Option<AnimationDirection>,
    clears: usize,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/carousel_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

type TestCarousel = Carousel<usize, RecordingSurface, ManualClock>;

fn replay(scenario: &Scenario) -> TestCarousel {
    let clock = ManualClock::new();
    let reviews = ReviewSet::new((0..scenario.len).collect()).unwrap();
    let mut carousel = Carousel::with_clock(
        reviews,
        CarouselOptions::default(),
        RecordingSurface::new(),
        clock.clone(),
    );

    for action in &scenario.actions {
        let (name, arg) = action.split_once(':').unwrap_or((action.as_str(), ""));
        match name {
            "next" => {
                carousel.step(AnimationDirection::Next);
            }
            "prev" => {
                carousel.step(AnimationDirection::Prev);
            }
            "click" => {
                carousel.click_card(arg.parse().unwrap()).unwrap();
            }
            "dot" => {
                carousel.go_to_index(arg.parse().unwrap()).unwrap();
            }
            "swipe" => {
                carousel.swipe(arg.parse().unwrap());
            }
            "wait" => {
                clock.advance(Duration::from_millis(arg.parse().unwrap()));
                carousel.tick();
            }
            other => panic!("{}: unknown action {other}", scenario.name),
        }
    }
    carousel
}

// ---------------------------------------------------------------------------
// Golden: every scenario
// ---------------------------------------------------------------------------

#[test]
fn golden_scenarios() {
    let data = load_golden_data();
    assert!(!data.scenarios.is_empty());

    for scenario in &data.scenarios {
        let carousel = replay(scenario);
        assert_eq!(carousel.cursor(), scenario.cursor, "{}: cursor", scenario.name);
        assert_eq!(
            carousel.positions(),
            scenario.positions,
            "{}: positions",
            scenario.name
        );
        assert_eq!(
            carousel.pending_animation(),
            scenario.animation,
            "{}: animation",
            scenario.name
        );
        assert_eq!(
            carousel.surface().clear_count(),
            scenario.clears,
            "{}: clears",
            scenario.name
        );
    }
}

#[test]
fn golden_surface_matches_controller() {
    let data = load_golden_data();
    for scenario in &data.scenarios {
        let carousel = replay(scenario);
        assert_eq!(
            carousel.surface().positions(),
            scenario.positions.as_slice(),
            "{}: surface positions",
            scenario.name
        );
        assert_eq!(
            carousel.surface().animation(),
            scenario.animation,
            "{}: surface animation",
            scenario.name
        );
    }
}

#[test]
fn golden_exactly_one_center() {
    let data = load_golden_data();
    for scenario in &data.scenarios {
        let centers = scenario
            .positions
            .iter()
            .filter(|p| **p == Position::Center)
            .count();
        assert_eq!(centers, 1, "{}: golden data has {centers} centers", scenario.name);
        assert_eq!(scenario.positions[scenario.cursor], Position::Center);
    }
}
