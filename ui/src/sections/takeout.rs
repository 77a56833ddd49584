use dioxus::prelude::*;

use crate::t;

const PHONE_DISPLAY: &str = "(555) 014-2290";
const PHONE_HREF: &str = "tel:+15550142290";

#[component]
pub fn Takeout() -> Element {
    rsx! {
        section { id: "takeout", class: "home-section home-takeout",
            div { class: "home-takeout__panel",
                h2 { class: "home-section__title", {t!("takeout-title")} }
                p { class: "home-takeout__body", {t!("takeout-body")} }
                p { class: "home-takeout__hours", {t!("takeout-hours")} }
                a { class: "button button--accent", href: PHONE_HREF,
                    {t!("takeout-cta")}
                    span { class: "home-takeout__phone", " {PHONE_DISPLAY}" }
                }
            }
        }
    }
}
