#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::nav::{anchor, register_nav, NavBuilder, NavTarget};
use ui::views::{Home, Profile};
use ui::Header;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopHeader)]
    #[route("/")]
    Home {},
    #[route("/profile")]
    Profile {},
}

// Compiled Tailwind output shared with the web launcher.
const TAILWIND_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../web/assets/tailwind.css"
));

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {err}");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Rabbit - v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn route_link(target: NavTarget, class: &'static str, children: Element) -> Element {
    match target {
        NavTarget::Root => rsx!(Link { class, to: Route::Home {}, {children} }),
        NavTarget::Profile => rsx!(Link { class, to: Route::Profile {}, {children} }),
        NavTarget::Placeholder => anchor(target, class, children),
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: route_link });
    tracing::debug!("desktop app mounted");

    // The topbar's language picker writes this; keying the router on it
    // remounts every page with the new catalog.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // Inline the stylesheet so packaged builds need no asset directory.
        document::Style { "{TAILWIND_CSS_INLINE}" }

        div { key: "{lang_code()}", Router::<Route> {} }
    }
}

#[component]
fn DesktopHeader() -> Element {
    rsx! {
        Header {}
        main { Outlet::<Route> {} }
    }
}
