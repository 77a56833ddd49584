//! Read-only review catalog backing the testimonial server function.
//!
//! Reviews are moderated upstream; the catalog ships as embedded JSON and is
//! parsed once per server process.
#![cfg_attr(not(feature = "server"), allow(dead_code))]

use once_cell::sync::Lazy;

use crate::Testimonial;

const SEED: &str = include_str!("../data/testimonials.json");

static CATALOG: Lazy<Result<TestimonialStore, String>> =
    Lazy::new(|| TestimonialStore::from_json(SEED).map_err(|err| err.to_string()));

#[derive(Debug, Clone, Default)]
pub struct TestimonialStore {
    records: Vec<Testimonial>,
}

impl TestimonialStore {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let records = serde_json::from_str(raw)?;
        Ok(Self { records })
    }

    /// Verified reviews with a rating in `1..=MAX_RATING`, in catalog order.
    pub fn verified(&self) -> Vec<Testimonial> {
        self.records
            .iter()
            .filter(|t| t.verified && t.has_valid_rating())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The process-wide catalog, or the seed parse error rendered as text.
pub fn catalog() -> Result<&'static TestimonialStore, &'static str> {
    Lazy::force(&CATALOG).as_ref().map_err(String::as_str)
}
