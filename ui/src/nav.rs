//! Static navigation model for the storefront header.
//!
//! The shared crate does not know any platform's `Route` enum, so links are
//! described here by [`NavTarget`] and turned into elements either by a
//! platform-registered [`NavBuilder`] or by plain anchors.

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Destination of a header link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    /// Application root (`/`).
    Root,
    /// Customer profile (`/profile`).
    Profile,
    /// Category pages do not exist yet; links point at `#`.
    Placeholder,
}

impl NavTarget {
    pub const fn href(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Profile => "/profile",
            Self::Placeholder => "#",
        }
    }
}

/// Logo text linking to the storefront root.
pub const BRAND: &str = "Rabbit";

/// Screen-reader text of the icon-only profile link.
pub const PROFILE_LABEL: &str = "Profile";

/// Product category shown in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Men,
    Women,
    TopWear,
    BottomWear,
}

impl Category {
    /// Display label. Category names are brand copy and stay the same in
    /// every locale.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::TopWear => "Top Wear",
            Self::BottomWear => "Bottom Wear",
        }
    }

    pub const fn target(self) -> NavTarget {
        NavTarget::Placeholder
    }
}

/// Center links of the navbar, in display order.
pub const CATEGORY_LINKS: [Category; 4] = [
    Category::Men,
    Category::Women,
    Category::TopWear,
    Category::BottomWear,
];

/// Link factory a platform crate registers so the header renders its
/// router-aware `Link`s:
/// ```ignore
/// register_nav(NavBuilder {
///     link: |target, class, children| match target {
///         NavTarget::Root => rsx!( Link { class, to: Route::Home {}, {children} } ),
///         NavTarget::Profile => rsx!( Link { class, to: Route::Profile {}, {children} } ),
///         NavTarget::Placeholder => ui::nav::anchor(target, class, children),
///     },
/// });
/// ```
pub struct NavBuilder {
    pub link: fn(target: NavTarget, class: &'static str, children: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the platform link factory. Only the first registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        dioxus::logger::tracing::trace!("nav builder already registered; keeping the first");
    }
}

/// Plain `<a>` used when no builder is registered (SSR, tests) and for
/// destinations the router does not own.
pub fn anchor(target: NavTarget, class: &'static str, children: Element) -> Element {
    rsx! {
        a { href: target.href(), class, {children} }
    }
}

/// Build a header link through the registered factory, or a plain anchor.
pub fn nav_link(target: NavTarget, class: &'static str, children: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(target, class, children),
        None => anchor(target, class, children),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_resolve_to_fixed_paths() {
        assert_eq!(NavTarget::Root.href(), "/");
        assert_eq!(NavTarget::Profile.href(), "/profile");
        assert_eq!(NavTarget::Placeholder.href(), "#");
    }

    #[test]
    fn categories_keep_display_order_and_placeholder_target() {
        let labels: Vec<&str> = CATEGORY_LINKS.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Men", "Women", "Top Wear", "Bottom Wear"]);
        assert!(CATEGORY_LINKS
            .iter()
            .all(|c| c.target() == NavTarget::Placeholder));
    }
}
