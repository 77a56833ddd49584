use api::Testimonial;
use dioxus::prelude::*;

use crate::core::format::{display_rating, initials, rating_stars};
use crate::t;

/// Curated quotes shown when the page has no review feed.
pub fn featured_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            101,
            "Priya Raman",
            "The focaccia alone is worth the trip. Warm, salty, gone in a minute.",
            5,
        )
        .with_location("Riverside"),
        Testimonial::new(
            102,
            "Oskar Lind",
            "We come every anniversary. The menu changes, the welcome never does.",
            5,
        ),
        Testimonial::new(
            103,
            "Hannah Ito",
            "Great short rib and a patient sommelier. Book early on weekends.",
            4,
        )
        .with_location("Old Town"),
    ]
}

/// Testimonials with the bundled quotes; no data dependency.
#[component]
pub fn Testimonials() -> Element {
    rsx! {
        TestimonialList { items: featured_testimonials() }
    }
}

/// Testimonials seeded from a retrieved review list.
#[component]
pub fn TestimonialsFeed(initial: Vec<Testimonial>) -> Element {
    rsx! {
        TestimonialList { items: initial }
    }
}

#[component]
fn TestimonialList(items: Vec<Testimonial>) -> Element {
    rsx! {
        section { id: "testimonials", class: "home-section home-testimonials",
            h2 { class: "home-section__title", {t!("testimonials-title")} }
            p { class: "home-section__intro", {t!("testimonials-intro")} }
            if items.is_empty() {
                p { class: "home-testimonials__empty", {t!("testimonials-empty")} }
            } else {
                div { class: "home-testimonials__grid",
                    for testimonial in items {
                        TestimonialCard { key: "{testimonial.id}", testimonial }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> Element {
    let rating = display_rating(testimonial.rating);
    let rating_label = t!("testimonial-rating", stars = rating.to_string());

    rsx! {
        article {
            class: "testimonial",
            "data-testimonial-id": "{testimonial.id}",
            div { class: "testimonial__avatar", aria_hidden: "true", {initials(&testimonial.author)} }
            blockquote { class: "testimonial__quote", "{testimonial.quote}" }
            footer { class: "testimonial__footer",
                span { class: "testimonial__author", "{testimonial.author}" }
                if let Some(location) = testimonial.location.as_deref() {
                    span { class: "testimonial__location", "{location}" }
                }
                span {
                    class: "testimonial__rating",
                    title: "{rating_label}",
                    aria_label: "{rating_label}",
                    {rating_stars(rating)}
                }
                if testimonial.verified {
                    span { class: "testimonial__verified", {t!("testimonials-verified")} }
                }
            }
        }
    }
}
