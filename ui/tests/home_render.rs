//! Server-side renders of the homepage, asserting on the `data-section`
//! markers and testimonial cards in the produced HTML.

use api::Testimonial;
use dioxus::prelude::*;
use futures::future::{FutureExt, LocalBoxFuture};
use ui::sections::featured_testimonials;
use ui::views::{home_error, HomePage, TestimonialFetcher, TestimonialResult};
use ui::HomeLayout;

async fn render(root: fn() -> Element) -> String {
    ui::i18n::init();
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dom.wait_for_suspense().await;
    // Flush boundaries marked dirty while suspense resolved.
    dom.render_immediate(&mut dioxus_core::NoOpMutations);
    dioxus_ssr::render(&dom)
}

fn attr_values(html: &str, attr: &str) -> Vec<String> {
    let needle = format!("{attr}=\"");
    html.match_indices(&needle)
        .filter_map(|(pos, m)| {
            let rest = &html[pos + m.len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .collect()
}

fn expected_slugs(layout: HomeLayout) -> Vec<String> {
    layout.sections().iter().map(|id| id.slug().to_string()).collect()
}

fn alice() -> Testimonial {
    Testimonial {
        id: 1,
        author: "Alice".to_string(),
        quote: String::new(),
        rating: 5,
        location: None,
        verified: true,
    }
}

fn fetch_alice() -> LocalBoxFuture<'static, TestimonialResult> {
    async { Ok(vec![alice()]) }.boxed_local()
}

fn fetch_nothing() -> LocalBoxFuture<'static, TestimonialResult> {
    async { Ok(Vec::new()) }.boxed_local()
}

fn review(id: u64, rating: u8, verified: bool) -> Testimonial {
    Testimonial {
        id,
        author: format!("Guest {id}"),
        quote: String::new(),
        rating,
        location: None,
        verified,
    }
}

fn fetch_mixed() -> LocalBoxFuture<'static, TestimonialResult> {
    async { Ok(vec![review(3, 9, true), review(1, 2, false), review(4, 4, true)]) }.boxed_local()
}

fn fetch_failure() -> LocalBoxFuture<'static, TestimonialResult> {
    async { Err(ServerFnError::ServerError("kitchen closed".to_string())) }.boxed_local()
}

fn classic_root() -> Element {
    rsx! {
        HomePage { layout: HomeLayout::classic() }
    }
}

fn classic_with_broken_fetcher_root() -> Element {
    use_context_provider(|| TestimonialFetcher::new(fetch_failure));
    rsx! {
        HomePage { layout: HomeLayout::classic() }
    }
}

fn alice_root() -> Element {
    use_context_provider(|| TestimonialFetcher::new(fetch_alice));
    rsx! {
        HomePage { layout: HomeLayout::with_takeout() }
    }
}

fn empty_root() -> Element {
    use_context_provider(|| TestimonialFetcher::new(fetch_nothing));
    rsx! {
        HomePage { layout: HomeLayout::with_takeout() }
    }
}

fn failing_root() -> Element {
    use_context_provider(|| TestimonialFetcher::new(fetch_failure));
    rsx! {
        ErrorBoundary { handle_error: home_error,
            HomePage { layout: HomeLayout::with_takeout() }
        }
    }
}

fn mixed_root() -> Element {
    use_context_provider(|| TestimonialFetcher::new(fetch_mixed));
    rsx! {
        HomePage { layout: HomeLayout::with_takeout() }
    }
}

fn report_error_kind(errors: ErrorContext) -> Element {
    let reported = errors
        .errors()
        .first()
        .and_then(|err| err.downcast::<ServerFnError>().cloned());
    let text = match reported {
        Some(ServerFnError::ServerError(message)) => format!("server-error:{message}"),
        other => format!("other:{other:?}"),
    };
    rsx! {
        p { class: "boundary-report", "{text}" }
    }
}

fn typed_failure_root() -> Element {
    use_context_provider(|| TestimonialFetcher::new(fetch_failure));
    rsx! {
        ErrorBoundary { handle_error: report_error_kind,
            HomePage { layout: HomeLayout::with_takeout() }
        }
    }
}

#[tokio::test]
async fn classic_renders_eight_sections_in_order() {
    let html = render(classic_root).await;
    let sections = attr_values(&html, "data-section");
    assert_eq!(sections.len(), 8);
    assert_eq!(sections, expected_slugs(HomeLayout::classic()));
    assert!(!sections.iter().any(|s| s == "takeout"));
}

#[tokio::test]
async fn classic_shows_bundled_testimonials() {
    let html = render(classic_root).await;
    let ids = attr_values(&html, "data-testimonial-id");
    let bundled: Vec<String> = featured_testimonials()
        .iter()
        .map(|t| t.id.to_string())
        .collect();
    assert_eq!(ids, bundled);
}

#[tokio::test]
async fn classic_ignores_the_fetcher() {
    let html = render(classic_with_broken_fetcher_root).await;
    assert_eq!(
        attr_values(&html, "data-section"),
        expected_slugs(HomeLayout::classic())
    );
    assert!(!html.contains("kitchen closed"));
}

#[tokio::test]
async fn takeout_layout_renders_nine_sections_in_order() {
    let html = render(alice_root).await;
    let sections = attr_values(&html, "data-section");
    assert_eq!(sections.len(), 9);
    assert_eq!(sections, expected_slugs(HomeLayout::with_takeout()));
}

#[tokio::test]
async fn fetched_testimonials_are_passed_through_exactly() {
    let html = render(alice_root).await;
    assert_eq!(attr_values(&html, "data-testimonial-id"), vec!["1".to_string()]);
    assert!(html.contains("Alice"));
    assert!(html.contains("★★★★★"));
}

#[tokio::test]
async fn several_fetched_testimonials_keep_their_order() {
    let html = render(mixed_root).await;
    assert_eq!(
        attr_values(&html, "data-testimonial-id"),
        vec!["3".to_string(), "1".to_string(), "4".to_string()]
    );
    assert!(html.contains("Guest 1"));
}

#[tokio::test]
async fn out_of_range_rating_is_shown_clamped() {
    let html = render(mixed_root).await;
    assert!(html.contains("★★★★★"));
    assert!(html.contains("★★☆☆☆"));
    assert!(!html.contains("9 out of"));
    assert!(!html.contains("9\u{2069} out of"));
}

#[tokio::test]
async fn empty_retrieval_still_renders_the_section() {
    let html = render(empty_root).await;
    let sections = attr_values(&html, "data-section");
    assert!(sections.iter().any(|s| s == "testimonials"));
    assert_eq!(sections.len(), 9);
    assert!(attr_values(&html, "data-testimonial-id").is_empty());
    assert!(html.contains("home-testimonials__empty"));
}

#[tokio::test]
async fn repeated_renders_are_identical() {
    let first = render(alice_root).await;
    let second = render(alice_root).await;
    assert_eq!(first, second);

    let first = render(classic_root).await;
    let second = render(classic_root).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn failed_retrieval_reaches_the_error_boundary() {
    let html = render(failing_root).await;
    assert!(attr_values(&html, "data-section").is_empty());
    assert!(html.contains("page-error"));
    assert!(html.contains("kitchen closed"));
}

#[tokio::test]
async fn error_boundary_receives_the_original_server_error() {
    let html = render(typed_failure_root).await;
    assert!(attr_values(&html, "data-section").is_empty());
    assert!(html.contains("server-error:kitchen closed"), "{html}");
}

#[test]
fn fetcher_returns_the_collaborator_error_unchanged() {
    let result = futures::executor::block_on(TestimonialFetcher::new(fetch_failure).fetch());
    match result {
        Err(ServerFnError::ServerError(message)) => assert_eq!(message, "kitchen closed"),
        other => panic!("unexpected result: {other:?}"),
    }
}
