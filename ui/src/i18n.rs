//! Internationalization (i18n) support for `rabbit-ui`.
//!
//! Topbar copy and page text live in Fluent catalogs embedded at compile
//! time. The navbar's brand and category labels are fixed literals and do
//! not go through the catalogs.
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/rabbit_ui.ftl   (fallback/reference)
//!   fr-FR/rabbit_ui.ftl
//! ```
//!
//! Call `init()` once before rendering (it is idempotent), then look up
//! messages through the `t!` macro:
//! ```ignore
//! ui::i18n::init();
//! let tagline = ui::t!("topbar-tagline");
//! ```
//!
//! Desktop builds negotiate against the OS locale list, web builds against
//! `navigator.languages`. Unknown languages fall back to `en-US`. The
//! topbar's language picker switches at runtime through `set_language`.
use std::sync::Once;

use dioxus::logger::tracing;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message through the shared loader.
///
/// ```ignore
/// t!("topbar-tagline")
/// t!("greeting", name = "Ada")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; `fl!` resolves it from the crate name (`rabbit_ui`), so the
/// fallback catalog is `i18n/en-US/rabbit_ui.ftl`.
const DOMAIN: &str = "rabbit_ui";

/// Tag of the fallback catalog.
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load localization bundles for the user's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "i18n languages selected"),
            Err(err) => {
                tracing::warn!(%err, "failed selecting languages; continuing with fallback")
            }
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => {
            tracing::debug!(tag, "ignoring unparseable language tag");
            return Ok(());
        }
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the catalog currently used for lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// The loader is process-global; tests asserting localized text hold this
/// while the language they selected is active.
#[cfg(test)]
static LANGUAGE_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Select `tag` and keep it active until the guard drops.
#[cfg(test)]
pub(crate) fn pin_language(tag: &str) -> std::sync::MutexGuard<'static, ()> {
    let guard = LANGUAGE_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    init();
    set_language(tag).expect("embedded catalog loads");
    guard
}

/// Pin the fallback catalog so assertions see the reference copy
/// regardless of the host locale.
#[cfg(test)]
pub(crate) fn use_fallback() -> std::sync::MutexGuard<'static, ()> {
    pin_language(FALLBACK_LANGUAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_and_french_are_embedded() {
        let langs = available_languages();
        assert_eq!(langs, ["en-US", "fr-FR"]);
    }

    #[test]
    fn fallback_lookup_matches_reference_copy() {
        let _lang = use_fallback();
        assert_eq!(current_language(), "en-US");
        assert_eq!(
            fl!(&*LOADER, "topbar-tagline"),
            "We ship worldwide - Fast and reliable shipping!"
        );
    }

    #[test]
    fn switching_language_changes_lookups() {
        let _lang = pin_language("fr-FR");
        assert_eq!(current_language(), "fr-FR");
        assert_eq!(fl!(&*LOADER, "profile-title"), "Mon compte");
    }

    #[test]
    fn unknown_language_falls_back_to_reference_copy() {
        let _lang = use_fallback();
        let _ = set_language("zz-ZZ");
        assert_eq!(fl!(&*LOADER, "home-title"), "New arrivals");
    }

    #[test]
    fn invalid_tag_is_ignored() {
        let _lang = use_fallback();
        assert!(set_language("not a tag!").is_ok());
        assert_eq!(current_language(), "en-US");
    }
}
