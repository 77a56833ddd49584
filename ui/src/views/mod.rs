mod home;
pub use home::{home_error, HomePage, TestimonialFetcher, TestimonialResult};
