#![no_main]

use libfuzzer_sys::fuzz_target;

use vitrine_core::review::load_reviews;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(reviews) = load_reviews(text) {
        for review in &reviews {
            assert!((1..=5).contains(&review.rating));
            assert_eq!(review.stars().chars().count(), 5);
        }
    }
});
