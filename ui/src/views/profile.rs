use dioxus::prelude::*;

#[component]
pub fn Profile() -> Element {
    crate::i18n::init();

    rsx! {
        section { class: "container mx-auto px-6 py-12",
            h1 { class: "text-2xl font-medium", {crate::t!("profile-title")} }
            p { class: "mt-2 text-gray-700", {crate::t!("profile-intro")} }
        }
    }
}
