//! Console output formatting.

use std::time::Duration;

use vitrine_core::position::{AnimationDirection, Position};
use vitrine_core::review::Review;

/// `index:class`, starred for the centered card.
#[must_use]
pub fn position_token(index: usize, position: Position) -> String {
    if position == Position::Center {
        format!("{index}:{}*", position.css_class())
    } else {
        format!("{index}:{}", position.css_class())
    }
}

/// One token per card, in review order.
#[must_use]
pub fn format_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| position_token(i, *p))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Track tag as it would appear on the page, `-` when cleared.
#[must_use]
pub fn format_animation(direction: Option<AnimationDirection>) -> &'static str {
    direction.map_or("-", AnimationDirection::css_class)
}

/// Pagination dots with the active one filled.
#[must_use]
pub fn format_dots(len: usize, cursor: usize) -> String {
    (0..len)
        .map(|i| if i == cursor { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A review card as plain text.
#[must_use]
pub fn format_review(review: &Review) -> String {
    let mut out = format!("{}\n\"{}\"\n{}", review.stars(), review.quote, review.author);
    if !review.role.is_empty() {
        out.push_str(", ");
        out.push_str(&review.role);
    }
    out
}

/// Format a delay for display: milliseconds below one second, else seconds.
#[must_use]
pub fn format_delay(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::{Center, Hidden, Left, Right};

    #[test]
    fn positions_mark_center() {
        assert_eq!(
            format_positions(&[Left, Center, Right, Hidden]),
            "0:left 1:center* 2:right 3:hidden"
        );
        assert_eq!(format_positions(&[Center]), "0:center*");
    }

    #[test]
    fn animation_tags() {
        assert_eq!(format_animation(Some(AnimationDirection::Next)), "carousel-anim-right");
        assert_eq!(format_animation(Some(AnimationDirection::Prev)), "carousel-anim-left");
        assert_eq!(format_animation(None), "-");
    }

    #[test]
    fn dots() {
        assert_eq!(format_dots(3, 1), "○ ● ○");
        assert_eq!(format_dots(0, 0), "");
    }

    #[test]
    fn review_card() {
        let review = Review {
            author: "Marc Tremblay".into(),
            role: "Entrepreneur".into(),
            quote: "Excellent travail".into(),
            rating: 4,
        };
        assert_eq!(
            format_review(&review),
            "★★★★☆\n\"Excellent travail\"\nMarc Tremblay, Entrepreneur"
        );
    }

    #[test]
    fn review_card_without_role() {
        let review = Review {
            author: "Anne".into(),
            role: String::new(),
            quote: "Bien".into(),
            rating: 5,
        };
        assert!(format_review(&review).ends_with("\nAnne"));
    }

    #[test]
    fn delays() {
        assert_eq!(format_delay(Duration::from_millis(700)), "700ms");
        assert_eq!(format_delay(Duration::from_millis(1500)), "1.50s");
    }
}
