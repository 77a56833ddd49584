//! Shared UI crate for Hearth. The homepage, its sections and localization live here.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod layout;
pub mod sections;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

pub use layout::{HomeLayout, SectionId, TestimonialSource};

/// Shared theme stylesheet, served as an asset on web.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The same theme as a string, for shells that inline their styles.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
