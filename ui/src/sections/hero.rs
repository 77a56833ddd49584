use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Hero(show_takeout: bool) -> Element {
    rsx! {
        section { id: "hero", class: "home-hero",
            div { class: "home-hero__inner",
                h1 { class: "home-hero__title", {t!("hero-title")} }
                p { class: "home-hero__tagline", {t!("hero-tagline")} }
                div { class: "home-hero__actions",
                    a { class: "button button--primary", href: "#menu", {t!("hero-cta-menu")} }
                    if show_takeout {
                        a { class: "button button--ghost", href: "#takeout", {t!("hero-cta-takeout")} }
                    }
                }
            }
        }
    }
}
