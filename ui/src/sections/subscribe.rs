use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::format::is_plausible_email;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
enum SignupState {
    Editing,
    Invalid,
    Subscribed(String),
}

/// Newsletter signup. The address is validated and confirmed locally; nothing is persisted.
#[component]
pub fn Subscribe() -> Element {
    let mut email = use_signal(String::new);
    let mut state = use_signal(|| SignupState::Editing);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let address = email().trim().to_string();
        if is_plausible_email(&address) {
            debug!("newsletter signup accepted");
            state.set(SignupState::Subscribed(address));
            email.set(String::new());
        } else {
            state.set(SignupState::Invalid);
        }
    };

    rsx! {
        section { id: "subscribe", class: "home-section home-subscribe",
            h2 { class: "home-section__title", {t!("subscribe-title")} }
            p { class: "home-section__intro", {t!("subscribe-body")} }
            {match state() {
                SignupState::Subscribed(address) => rsx! {
                    p { class: "home-subscribe__thanks", role: "status",
                        {t!("subscribe-thanks", email = address)}
                    }
                },
                current => rsx! {
                    form { class: "home-subscribe__form", onsubmit: on_submit,
                        input {
                            class: "home-subscribe__input",
                            r#type: "email",
                            name: "email",
                            placeholder: t!("subscribe-placeholder"),
                            value: "{email}",
                            oninput: move |evt: FormEvent| {
                                email.set(evt.value());
                                state.set(SignupState::Editing);
                            },
                        }
                        button { class: "button button--primary", r#type: "submit",
                            {t!("subscribe-button")}
                        }
                        if current == SignupState::Invalid {
                            p { class: "home-subscribe__error", role: "alert",
                                {t!("subscribe-invalid")}
                            }
                        }
                    }
                },
            }}
        }
    }
}
