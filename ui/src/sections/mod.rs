//! Presentational homepage sections. Each renders its own `section` element
//! anchored at `SectionId::slug()`.

mod chef;
pub use chef::ChefSpotlight;

mod faq;
pub use faq::Faq;

mod hero;
pub use hero::Hero;

mod how_it_works;
pub use how_it_works::HowItWorks;

mod menu;
pub use menu::MenuHighlights;

mod story;
pub use story::OurStory;

mod subscribe;
pub use subscribe::Subscribe;

mod takeout;
pub use takeout::Takeout;

mod testimonials;
pub use testimonials::{featured_testimonials, TestimonialCard, Testimonials, TestimonialsFeed};
