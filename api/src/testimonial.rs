//! Customer review records shared by the server and every client platform.

use serde::{Deserialize, Serialize};

/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// A customer review. Only records with `verified` set are ever served to the homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u64,
    pub author: String,
    #[serde(default)]
    pub quote: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

impl Testimonial {
    pub fn new(id: u64, author: impl Into<String>, quote: impl Into<String>, rating: u8) -> Self {
        Self {
            id,
            author: author.into(),
            quote: quote.into(),
            rating: rating.min(MAX_RATING),
            location: None,
            verified: true,
        }
    }

    /// Ratings outside `1..=MAX_RATING` are malformed and never displayed.
    pub fn has_valid_rating(&self) -> bool {
        (1..=MAX_RATING).contains(&self.rating)
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
