use dioxus::prelude::*;

use api::ApiConfig;
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::session::Session;
use ui::views::{Course, Home, Slide, SlideQuestion};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/course/:cid")]
    Course { cid: String },
    #[route("/slide/:sid/:page")]
    Slide { sid: String, page: u32 },
    #[route("/slide/:sid/:page/:qid")]
    SlideQuestion { sid: String, page: u32, qid: u32 },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { home: nav_home });

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        tracing::info!(server = %config.server_url, "slidechat web client starting");
        config
    });
    use_context_provider(Session::load);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> {}
    }
}

/// Navbar layout bound to the web `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
