use dioxus::prelude::*;

use crate::core::format::format_price;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
struct Dish {
    key: &'static str,
    name: String,
    description: String,
    price_cents: u32,
}

// Prices are set by the kitchen, not translated.
fn signature_dishes() -> Vec<Dish> {
    vec![
        Dish {
            key: "short-rib",
            name: t!("dish-short-rib-name"),
            description: t!("dish-short-rib-desc"),
            price_cents: 2800,
        },
        Dish {
            key: "focaccia",
            name: t!("dish-focaccia-name"),
            description: t!("dish-focaccia-desc"),
            price_cents: 750,
        },
        Dish {
            key: "risotto",
            name: t!("dish-risotto-name"),
            description: t!("dish-risotto-desc"),
            price_cents: 2150,
        },
        Dish {
            key: "tart",
            name: t!("dish-tart-name"),
            description: t!("dish-tart-desc"),
            price_cents: 1100,
        },
    ]
}

#[component]
pub fn MenuHighlights() -> Element {
    let dishes = signature_dishes();

    rsx! {
        section { id: "menu", class: "home-section home-menu",
            h2 { class: "home-section__title", {t!("menu-title")} }
            p { class: "home-section__intro", {t!("menu-intro")} }
            ul { class: "home-menu__items",
                for dish in dishes {
                    li { key: "{dish.key}", class: "home-menu__item",
                        div { class: "home-menu__item-header",
                            h3 { class: "home-menu__name", "{dish.name}" }
                            span { class: "home-menu__price", {format_price(dish.price_cents)} }
                        }
                        p { class: "home-menu__description", "{dish.description}" }
                    }
                }
            }
        }
    }
}
