use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::nav::{anchor, register_nav, NavBuilder, NavTarget};
use ui::views::{Home, Profile};
use ui::Header;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebHeader)]
    #[route("/")]
    Home {},
    #[route("/profile")]
    Profile {},
}

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Router-aware header links. Category pages have no route yet and keep the
/// plain placeholder anchor.
fn route_link(target: NavTarget, class: &'static str, children: Element) -> Element {
    match target {
        NavTarget::Root => rsx!(Link { class, to: Route::Home {}, {children} }),
        NavTarget::Profile => rsx!(Link { class, to: Route::Profile {}, {children} }),
        NavTarget::Placeholder => anchor(target, class, children),
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: route_link });
    tracing::debug!("web app mounted");

    // The topbar's language picker writes this; keying the router on it
    // remounts every page with the new catalog.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        div { key: "{lang_code()}", Router::<Route> {} }
    }
}

/// Shared storefront header above every routed page.
#[component]
fn WebHeader() -> Element {
    rsx! {
        Header {}
        main { Outlet::<Route> {} }
    }
}
