//! Shared fullstack server functions for Hearth.

use dioxus::prelude::*;

mod store;
mod testimonial;

pub use store::TestimonialStore;
pub use testimonial::{Testimonial, MAX_RATING};

/// Verified customer reviews for the homepage, in catalog order.
#[server(GetVerifiedTestimonials)]
pub async fn get_verified_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    use dioxus::logger::tracing::info;

    let catalog = store::catalog().map_err(|err| ServerFnError::ServerError(err.to_string()))?;
    let verified = catalog.verified();
    info!(count = verified.len(), "serving verified testimonials");
    Ok(verified)
}
