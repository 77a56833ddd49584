use crate::i18n::{self, section_label};
use crate::layout::{HomeLayout, SectionId};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` so the shared navbar can link to the
/// home route without knowing each platform's `Route` enum.
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
/// });
/// ```
///
/// Without a builder the brand falls back to a plain `/` anchor.
pub struct NavBuilder {
    // Must return a Link (or element styled as a nav link) containing exactly `label`.
    pub home: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Sections that get an in-page anchor in the navbar. The hero is reached through the home link.
pub fn anchor_sections(layout: &HomeLayout) -> Vec<SectionId> {
    layout
        .sections()
        .into_iter()
        .filter(|id| *id != SectionId::Hero)
        .collect()
}

#[component]
pub fn AppNavbar(layout: HomeLayout) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        dioxus::logger::tracing::debug!(lang = %_lang_marker, "AppNavbar render");
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let home_label = t!("nav-home");
    let home_link = NAV_BUILDER.get().map(|b| (b.home)(&home_label));

    let anchors: Vec<(&'static str, String)> = anchor_sections(&layout)
        .into_iter()
        .map(|id| (id.slug(), section_label(id)))
        .collect();

    let brand = t!("brand-name");
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-flame", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "{brand}" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                nav { class: "navbar__links",
                    if let Some(link) = home_link {
                        {link}
                    } else {
                        a { class: "navbar__link", href: "/", "{home_label}" }
                    }
                    for (slug, label) in anchors {
                        a { key: "{slug}", class: "navbar__link navbar__link--anchor", href: "#{slug}", "{label}" }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_skip_hero_and_follow_layout() {
        let classic = anchor_sections(&HomeLayout::classic());
        assert!(!classic.contains(&SectionId::Hero));
        assert!(!classic.contains(&SectionId::Takeout));
        assert_eq!(classic.len(), 7);

        let takeout = anchor_sections(&HomeLayout::with_takeout());
        assert!(takeout.contains(&SectionId::Takeout));
        assert_eq!(takeout.first(), Some(&SectionId::MenuHighlights));
    }
}
