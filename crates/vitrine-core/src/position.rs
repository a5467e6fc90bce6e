//! Position classification and animation direction tags.
//!
//! Positions are never stored: they are derived from `(index - cursor) mod len`
//! every time the cursor moves, so the cursor stays the single source of truth.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a review card sits relative to the centered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Center,
    Left,
    Right,
    Hidden,
}

impl Position {
    /// Classify the card at `index` for a carousel of `len` items centered on `cursor`.
    ///
    /// With two items the only neighbour is reported as [`Position::Right`]:
    /// the forward distance of one is tested before `len - 1`.
    ///
    /// Callers guarantee `cursor < len` and `index < len`.
    #[must_use]
    pub fn classify(index: usize, cursor: usize, len: usize) -> Self {
        debug_assert!(len > 0 && cursor < len && index < len);
        match forward_distance(cursor, index, len) {
            0 => Self::Center,
            1 => Self::Right,
            d if d == len - 1 => Self::Left,
            _ => Self::Hidden,
        }
    }

    /// Class name applied to the card element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::Right => "right",
            Self::Hidden => "hidden",
        }
    }

    /// Whether clicking a card in this position navigates.
    #[must_use]
    pub fn is_adjacent(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Transition direction attached to the track after a cursor change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationDirection {
    Next,
    Prev,
}

impl AnimationDirection {
    /// Class name applied to the track element while the transition runs.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Next => "carousel-anim-right",
            Self::Prev => "carousel-anim-left",
        }
    }

    /// Direction of a direct jump from `from` to `to`.
    ///
    /// Returns `None` when the two indices are equal. Jumps of at most half
    /// the ring forward animate as `Next`, anything further as `Prev`.
    #[must_use]
    pub fn between(from: usize, to: usize, len: usize) -> Option<Self> {
        if from == to {
            return None;
        }
        if forward_distance(from, to, len) <= len / 2 {
            Some(Self::Next)
        } else {
            Some(Self::Prev)
        }
    }
}

impl fmt::Display for AnimationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Prev => f.write_str("prev"),
        }
    }
}

/// Forward cyclic distance from `from` to `to` on a ring of `len` slots.
#[inline]
#[must_use]
pub fn forward_distance(from: usize, to: usize, len: usize) -> usize {
    (to + len - from) % len
}

/// Classify every card of a `len`-item carousel centered on `cursor`.
#[must_use]
pub fn classify_all(cursor: usize, len: usize) -> Vec<Position> {
    (0..len).map(|i| Position::classify(i, cursor, len)).collect()
}
