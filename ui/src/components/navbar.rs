use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::icons::UserIcon;
use crate::nav::{nav_link, NavTarget, BRAND, CATEGORY_LINKS, PROFILE_LABEL};

const BAR_CLASS: &str = "container mx-auto flex items-center justify-between py-4 px-6";
const LOGO_CLASS: &str = "text-2xl font-medium";
const CATEGORIES_CLASS: &str = "hidden md:flex space-x-6";
const CATEGORY_LINK_CLASS: &str = "text-gray-700 hover:text-black text-sm font-medium uppercase";
const ACTIONS_CLASS: &str = "flex items-center space-x-4";
const PROFILE_LINK_CLASS: &str = "hover:text-black";

/// Storefront navigation bar: logo on the left, category links in the
/// middle, account actions on the right. Labels are fixed brand copy, so the
/// bar renders the same markup in every locale.
#[component]
pub fn Navbar() -> Element {
    tracing::trace!("Navbar render");

    rsx! {
        nav { class: BAR_CLASS,
            div {
                {nav_link(NavTarget::Root, LOGO_CLASS, rsx! { "{BRAND}" })}
            }
            div { class: CATEGORIES_CLASS,
                for category in CATEGORY_LINKS {
                    {nav_link(category.target(), CATEGORY_LINK_CLASS, rsx! { {category.label()} })}
                }
            }
            div { class: ACTIONS_CLASS,
                {nav_link(
                    NavTarget::Profile,
                    PROFILE_LINK_CLASS,
                    rsx! {
                        UserIcon {}
                        span { class: "sr-only", "{PROFILE_LABEL}" }
                    },
                )}
            }
        }
    }
}
