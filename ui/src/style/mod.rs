//! Build-time style configuration for the Tailwind utility-class scanner.
//!
//! [`StyleConfig::storefront`] is the source of truth for
//! `web/tailwind.config.js`; a test in the web crate keeps the committed file
//! in sync with [`StyleConfig::to_js_module`].

mod config;
mod content;
mod error;
mod palette;

pub use config::{StyleConfig, Theme, ThemeExtension, RABBIT_RED};
pub use content::ContentPattern;
pub use error::{Error, Result};
pub use palette::{HexColor, Palette};
