use dioxus::prelude::*;

use crate::t;

#[component]
pub fn OurStory() -> Element {
    rsx! {
        section { id: "story", class: "home-section home-story",
            h2 { class: "home-section__title", {t!("story-title")} }
            p { class: "home-story__body", {t!("story-body")} }
        }
    }
}
