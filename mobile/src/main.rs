use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::HomePage;
use ui::{HomeLayout, THEME_CSS_INLINE};

/// Same offline page as desktop.
const HOME_LAYOUT: HomeLayout = HomeLayout::classic();

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileNavbar)]
    #[route("/")]
    Home {},
}

fn main() {
    dioxus::launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder { home: nav_home });

    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        HomePage { layout: HOME_LAYOUT }
    }
}

#[component]
fn MobileNavbar() -> Element {
    rsx! {
        AppNavbar { layout: HOME_LAYOUT }
        Outlet::<Route> {}
    }
}
