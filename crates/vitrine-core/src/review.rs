//! Review records and loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

const DEFAULT_REVIEWS: &str = include_str!("../data/reviews.json");

/// Errors raised while reading review or string data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("review {index} has rating {rating}, expected 1 to 5")]
    Rating { index: usize, rating: u8 },
}

/// A client testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    #[serde(default)]
    pub role: String,
    pub quote: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    5
}

impl Review {
    /// Rating rendered as filled and empty stars.
    #[must_use]
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// Parse a JSON array of reviews.
pub fn load_reviews(json: &str) -> Result<Vec<Review>, DataError> {
    let reviews: Vec<Review> = serde_json::from_str(json)?;
    for (index, review) in reviews.iter().enumerate() {
        if !(1..=5).contains(&review.rating) {
            return Err(DataError::Rating {
                index,
                rating: review.rating,
            });
        }
    }
    Ok(reviews)
}

/// Read and parse a JSON review file.
pub fn load_reviews_from_path(path: &Path) -> Result<Vec<Review>, DataError> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_reviews(&content)
}

/// The bundled testimonials.
#[must_use]
pub fn default_reviews() -> Vec<Review> {
    load_reviews(DEFAULT_REVIEWS).unwrap_or_default()
}
