//! Localized copy for every homepage section.
//!
//! Catalogs live in `i18n/<locale>/hearth_ui.ftl` (en-US is the fallback and
//! reference) and are embedded with `rust-embed`, so native shells ship without
//! loose asset files. Lookups go through `t!`, which wraps `i18n-embed-fl`'s
//! compile-time checked `fl!` macro around the shared `LOADER`.
//!
//! The requested locale comes from `navigator.languages` on wasm and the OS
//! locale list elsewhere. `set_language` switches at runtime (the navbar's
//! locale picker) and `available_languages` lists embedded locales.
//!
//! Adding a locale: copy the en-US catalog into a new folder, translate the
//! values keeping ids and `{ $placeables }` unchanged, then run the crate tests.
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::layout::SectionId;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("subscribe-thanks", email = "guest@example.com")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; each catalog is `i18n/<locale>/{DOMAIN}.ftl`.
const DOMAIN: &str = "hearth_ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "[i18n] ignoring unparsable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Localized label for a homepage section, used by the in-page navigation.
pub fn section_label(id: SectionId) -> String {
    match id {
        SectionId::Hero => crate::t!("nav-home"),
        SectionId::MenuHighlights => crate::t!("nav-menu"),
        SectionId::ChefSpotlight => crate::t!("nav-chef"),
        SectionId::OurStory => crate::t!("nav-story"),
        SectionId::Testimonials => crate::t!("nav-testimonials"),
        SectionId::HowItWorks => crate::t!("nav-how-it-works"),
        SectionId::Takeout => crate::t!("nav-takeout"),
        SectionId::Subscribe => crate::t!("nav-subscribe"),
        SectionId::Faq => crate::t!("nav-faq"),
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
