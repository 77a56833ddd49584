use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{home_error, HomePage};
use ui::HomeLayout;

/// The web build is fullstack: testimonials come from the server and takeout is offered.
const HOME_LAYOUT: HomeLayout = HomeLayout::with_takeout();

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { home: nav_home });

    // Global language code; AppNavbar updates it on locale selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Hearth" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        ErrorBoundary { handle_error: home_error,
            SuspenseBoundary {
                fallback: |_: SuspenseContext| rsx! {
                    div { class: "page page-loading", aria_busy: "true" }
                },
                HomePage { layout: HOME_LAYOUT }
            }
        }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { layout: HOME_LAYOUT }
        Outlet::<Route> {}
    }
}
