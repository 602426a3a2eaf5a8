use dioxus::logger::tracing;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    crate::i18n::init();
    tracing::trace!("Home render");

    rsx! {
        section { class: "container mx-auto px-6 py-12",
            h1 { class: "text-3xl font-medium", {crate::t!("home-title")} }
            p { class: "mt-2 text-gray-700", {crate::t!("home-intro")} }
        }
    }
}
