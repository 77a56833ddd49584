use dioxus::prelude::*;

use crate::t;

#[component]
pub fn HowItWorks() -> Element {
    let steps = [
        (t!("how-step-browse-title"), t!("how-step-browse-body")),
        (t!("how-step-order-title"), t!("how-step-order-body")),
        (t!("how-step-enjoy-title"), t!("how-step-enjoy-body")),
    ];

    rsx! {
        section { id: "how-it-works", class: "home-section home-steps",
            h2 { class: "home-section__title", {t!("how-title")} }
            ol { class: "home-steps__list",
                for (index, (title, body)) in steps.into_iter().enumerate() {
                    li { key: "{index}", class: "home-steps__step",
                        span { class: "home-steps__number", {(index + 1).to_string()} }
                        h3 { class: "home-steps__title", "{title}" }
                        p { class: "home-steps__body", "{body}" }
                    }
                }
            }
        }
    }
}
