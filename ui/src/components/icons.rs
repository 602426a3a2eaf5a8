//! Inline SVG glyphs (Heroicons / Simple Icons outlines).
//!
//! Each icon inherits `currentColor` so links can restyle it on hover.

use dioxus::prelude::*;

#[component]
fn OutlineIcon(class: String, d: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path { stroke_linecap: "round", stroke_linejoin: "round", d }
        }
    }
}

/// Outline user glyph shown for the profile link.
#[component]
pub fn UserIcon(#[props(default = "h-6 w-6 text-gray-700".to_string())] class: String) -> Element {
    rsx! {
        OutlineIcon { class, d: "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z" }
    }
}

#[component]
pub fn MetaIcon(#[props(default = "h-5 w-5".to_string())] class: String) -> Element {
    rsx! {
        OutlineIcon {
            class,
            d: "M6.5 15.5c0-3.5 1.8-7 3.6-7 1.4 0 2.6 2.4 3.9 4.6 1.2 2.1 2.3 3.9 3.8 3.9 1.6 0 2.2-1.6 2.2-3.6 0-3.4-1.8-6.9-3.8-6.9-1.5 0-2.7 1.6-3.9 3.6-1.3 2.2-2.6 4.9-4.6 4.9-1.2 0-1.2-1-1.2-1.5z",
        }
    }
}

#[component]
pub fn InstagramIcon(#[props(default = "h-5 w-5".to_string())] class: String) -> Element {
    rsx! {
        OutlineIcon {
            class,
            d: "M7 3h10a4 4 0 014 4v10a4 4 0 01-4 4H7a4 4 0 01-4-4V7a4 4 0 014-4zM12 8a4 4 0 100 8 4 4 0 000-8zM17.5 6.5h.01",
        }
    }
}

#[component]
pub fn XIcon(#[props(default = "h-4 w-4".to_string())] class: String) -> Element {
    rsx! {
        OutlineIcon { class, d: "M4 4l16 16M20 4L4 20" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::ssr::render_element;

    #[test]
    fn glyphs_are_hidden_from_assistive_tech() {
        let html = render_element(rsx! { UserIcon {} });
        assert!(html.starts_with(r#"<svg class="h-6 w-6 text-gray-700""#), "{html}");
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains(r#"stroke="currentColor""#));
    }

    #[test]
    fn class_override_replaces_default_sizing() {
        let html = render_element(rsx! { XIcon { class: "h-8 w-8" } });
        assert!(html.starts_with(r#"<svg class="h-8 w-8""#), "{html}");
    }
}
