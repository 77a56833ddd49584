use dioxus::prelude::*;

use crate::core::format::initials;
use crate::t;

#[component]
pub fn ChefSpotlight() -> Element {
    let name = t!("chef-name");
    let badge = initials(&name);

    rsx! {
        section { id: "chef", class: "home-section home-chef",
            h2 { class: "home-section__title", {t!("chef-title")} }
            div { class: "home-chef__card",
                div { class: "home-chef__portrait", aria_hidden: "true", "{badge}" }
                div { class: "home-chef__text",
                    h3 { class: "home-chef__name", "{name}" }
                    p { class: "home-chef__role", {t!("chef-role")} }
                    p { class: "home-chef__bio", {t!("chef-bio")} }
                }
            }
        }
    }
}
