use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::icons::{InstagramIcon, MetaIcon, XIcon};
use crate::i18n;
use crate::t;

const PHONE_HREF: &str = "tel:+1234567890";
const SOCIAL_LINK_CLASS: &str = "hover:text-gray-300";

#[component]
fn SocialLink(href: &'static str, label: String, children: Element) -> Element {
    rsx! {
        a {
            href,
            class: SOCIAL_LINK_CLASS,
            target: "_blank",
            rel: "noopener noreferrer",
            "aria-label": "{label}",
            {children}
        }
    }
}

/// Locale switcher. Launchers that provide a `Signal<String>` context get it
/// updated on change so their routed subtree re-renders in the new language.
#[component]
fn LanguagePicker() -> Element {
    let mut current = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let lang_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                current.set(tag.clone());
                if let Some(mut code) = lang_ctx {
                    code.set(tag);
                }
            }
            Err(err) => tracing::warn!(%err, %tag, "language switch failed"),
        }
    };

    rsx! {
        label { class: "sr-only", r#for: "locale-select", {t!("topbar-language-label")} }
        select {
            id: "locale-select",
            class: "bg-transparent text-sm",
            value: "{current()}",
            oninput: on_change,
            for code in langs() {
                option { key: "{code}", class: "text-black", value: "{code}", "{code}" }
            }
        }
    }
}

/// Promotional strip rendered above the navbar in the brand color.
#[component]
pub fn Topbar() -> Element {
    i18n::init();

    let tagline = t!("topbar-tagline");
    let phone = t!("topbar-phone");
    let show_picker = i18n::available_languages().len() > 1;

    rsx! {
        div { class: "bg-rabbit-red text-white",
            div { class: "container mx-auto flex justify-between items-center py-3 px-4",
                div { class: "hidden md:flex items-center space-x-4",
                    SocialLink { href: "https://www.facebook.com", label: t!("topbar-meta"), MetaIcon {} }
                    SocialLink { href: "https://www.instagram.com", label: t!("topbar-instagram"), InstagramIcon {} }
                    SocialLink { href: "https://www.x.com", label: t!("topbar-x"), XIcon {} }
                }
                div { class: "text-sm text-center flex-grow",
                    span { "{tagline}" }
                }
                div { class: "flex items-center space-x-4",
                    a { href: PHONE_HREF, class: "text-sm hidden md:block hover:text-gray-300", "{phone}" }
                    if show_picker {
                        LanguagePicker {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::ssr::render_element;

    #[test]
    fn strip_uses_brand_color_and_tagline() {
        let _lang = crate::i18n::use_fallback();
        let html = render_element(rsx! { Topbar {} });
        assert!(html.starts_with(r#"<div class="bg-rabbit-red text-white">"#), "{html}");
        assert!(html.contains("We ship worldwide - Fast and reliable shipping!"));
        assert!(html.contains(r#"href="tel:+1234567890""#));
        assert_eq!(html.matches("<svg").count(), 3);
    }

    #[test]
    fn picker_offers_every_embedded_language() {
        let _lang = crate::i18n::use_fallback();
        let html = render_element(rsx! { Topbar {} });
        assert!(html.contains(r#"id="locale-select""#), "{html}");
        for code in crate::i18n::available_languages() {
            assert!(html.contains(&format!(r#"value="{code}""#)), "missing option {code}");
        }
        assert!(html.contains(">Language</label>"));
    }

    #[test]
    fn copy_follows_selected_language() {
        let _lang = crate::i18n::pin_language("fr-FR");
        let html = render_element(rsx! { Topbar {} });
        assert!(html.contains("Livraison dans le monde entier"), "{html}");
        assert!(html.contains(">Langue</label>"));
    }
}
