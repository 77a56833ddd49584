#![cfg(test)]
/*!
Selector lint for the shared theme as embedded by the desktop build.

Every class below is emitted by a homepage section in `ui/src/sections/` or
the page composer. If you rename a class in a component, rename it here and
in `ui/assets/theme/main.css` together.
*/

use ui::{HomeLayout, THEME_CSS_INLINE};

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page-home__section",
    ".page-error",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Sections
    ".home-section__title",
    ".home-hero__title",
    ".home-hero__actions",
    ".home-menu__items",
    ".home-menu__price",
    ".home-chef__portrait",
    ".home-story__body",
    ".home-steps__number",
    ".home-takeout__panel",
    ".home-subscribe__form",
    ".home-subscribe__error",
    ".home-faq__item--open",
    ".home-faq__answer",
    // Testimonials
    ".home-testimonials__grid",
    ".home-testimonials__empty",
    ".testimonial {",
    ".testimonial__quote",
    ".testimonial__rating",
    ".testimonial__verified",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS_INLINE.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn every_section_slug_has_a_styled_block() {
    // Section wrappers are styled as `.home-<slug>` except the hero and steps, which have their own names.
    for id in HomeLayout::with_takeout().sections() {
        let slug = id.slug();
        let selector = match slug {
            "hero" => ".home-hero".to_string(),
            "how-it-works" => ".home-steps".to_string(),
            other => format!(".home-{other}"),
        };
        assert!(
            THEME_CSS_INLINE.contains(&selector),
            "No styles for section `{slug}` (expected `{selector}`)"
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS_INLINE.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars) – \
         did the file get truncated or path change?"
    );
}
