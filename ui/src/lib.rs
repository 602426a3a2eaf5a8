//! Shared UI crate for the Rabbit storefront: header components, views,
//! localization and the Tailwind style configuration.

pub mod components;
pub mod i18n;
pub mod nav;
pub mod style;
pub mod views;

pub use components::{Header, Navbar, Topbar};
