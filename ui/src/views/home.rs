use api::Testimonial;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use futures::future::{FutureExt, LocalBoxFuture};

use crate::layout::{HomeLayout, SectionId, TestimonialSource};
use crate::sections::{
    ChefSpotlight, Faq, Hero, HowItWorks, MenuHighlights, OurStory, Subscribe, Takeout,
    Testimonials, TestimonialsFeed,
};

pub type TestimonialResult = Result<Vec<Testimonial>, ServerFnError>;

/// Retrieval capability for verified testimonials.
///
/// Defaults to the `get_verified_testimonials` server function. Provide a
/// different fetcher through context (`use_context_provider`) to render the
/// page against other data.
#[derive(Clone, Copy)]
pub struct TestimonialFetcher(fn() -> LocalBoxFuture<'static, TestimonialResult>);

impl TestimonialFetcher {
    pub const fn new(fetch: fn() -> LocalBoxFuture<'static, TestimonialResult>) -> Self {
        Self(fetch)
    }

    pub fn fetch(&self) -> LocalBoxFuture<'static, TestimonialResult> {
        (self.0)()
    }
}

impl Default for TestimonialFetcher {
    fn default() -> Self {
        Self::new(|| api::get_verified_testimonials().boxed_local())
    }
}

#[cfg(debug_assertions)]
fn log_home_render(layout: &HomeLayout, lang: &str) {
    dioxus::logger::tracing::debug!(?layout, lang, "home render");
}

/// The homepage: `layout.sections()` rendered top to bottom.
///
/// With `TestimonialSource::Fetched` the page suspends until the fetcher
/// resolves. A failed retrieval is handed to the nearest `ErrorBoundary`
/// untouched and no sections are rendered.
#[component]
pub fn HomePage(layout: HomeLayout) -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&layout, &_lang_current);
    }

    match layout.testimonials {
        TestimonialSource::Static => compose(layout, None),
        TestimonialSource::Fetched => rsx! {
            FetchedHome { layout }
        },
    }
}

/// Error view for boundaries around `HomePage`. Shows the retrieval error as reported.
pub fn home_error(errors: ErrorContext) -> Element {
    let messages: Vec<String> = errors.errors().iter().map(|e| e.to_string()).collect();
    rsx! {
        div { class: "page page-error", role: "alert",
            for message in messages {
                p { "{message}" }
            }
        }
    }
}

#[component]
fn FetchedHome(layout: HomeLayout) -> Element {
    let fetcher = try_use_context::<TestimonialFetcher>().unwrap_or_default();
    let verified = use_resource(move || fetcher.fetch()).suspend()?;

    let testimonials = match &*verified.read() {
        Ok(list) => list.clone(),
        Err(err) => {
            warn!("verified testimonial retrieval failed: {err}");
            return Err(err.clone().into());
        }
    };

    compose(layout, Some(testimonials))
}

fn compose(layout: HomeLayout, testimonials: Option<Vec<Testimonial>>) -> Element {
    let sections: Vec<(&'static str, Element)> = layout
        .sections()
        .into_iter()
        .map(|id| (id.slug(), render_section(id, &layout, testimonials.as_deref())))
        .collect();

    rsx! {
        div { class: "page page-home",
            for (slug, section) in sections {
                div { key: "{slug}", class: "page-home__section", "data-section": slug,
                    {section}
                }
            }
        }
    }
}

fn render_section(id: SectionId, layout: &HomeLayout, testimonials: Option<&[Testimonial]>) -> Element {
    match id {
        SectionId::Hero => rsx! {
            Hero { show_takeout: layout.include_takeout }
        },
        SectionId::MenuHighlights => rsx! {
            MenuHighlights {}
        },
        SectionId::ChefSpotlight => rsx! {
            ChefSpotlight {}
        },
        SectionId::OurStory => rsx! {
            OurStory {}
        },
        SectionId::Testimonials => match testimonials {
            Some(items) => rsx! {
                TestimonialsFeed { initial: items.to_vec() }
            },
            None => rsx! {
                Testimonials {}
            },
        },
        SectionId::HowItWorks => rsx! {
            HowItWorks {}
        },
        SectionId::Takeout => rsx! {
            Takeout {}
        },
        SectionId::Subscribe => rsx! {
            Subscribe {}
        },
        SectionId::Faq => rsx! {
            Faq {}
        },
    }
}
