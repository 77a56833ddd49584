use dioxus::prelude::*;

use crate::t;

/// Accordion: clicking the open question closes it, clicking another one switches to it.
fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

fn item_class(expanded: bool) -> &'static str {
    if expanded {
        "home-faq__item home-faq__item--open"
    } else {
        "home-faq__item"
    }
}

#[component]
pub fn Faq() -> Element {
    let mut open = use_signal(|| None::<usize>);

    let entries: Vec<(usize, String, String, bool)> = [
        (t!("faq-reservations-q"), t!("faq-reservations-a")),
        (t!("faq-dietary-q"), t!("faq-dietary-a")),
        (t!("faq-parking-q"), t!("faq-parking-a")),
        (t!("faq-private-q"), t!("faq-private-a")),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (question, answer))| (index, question, answer, open() == Some(index)))
    .collect();

    rsx! {
        section { id: "faq", class: "home-section home-faq",
            h2 { class: "home-section__title", {t!("faq-title")} }
            div { class: "home-faq__list",
                for (index, question, answer, expanded) in entries {
                    div {
                        key: "{index}",
                        class: item_class(expanded),
                        button {
                            class: "home-faq__question",
                            r#type: "button",
                            aria_expanded: "{expanded}",
                            onclick: move |_| {
                                let next = toggle(open(), index);
                                open.set(next);
                            },
                            "{question}"
                        }
                        if expanded {
                            p { class: "home-faq__answer", "{answer}" }
                        }
                    }
                }
            }
        }
    }
}
