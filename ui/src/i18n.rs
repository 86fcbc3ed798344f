//! Localisation for `cacaosort-ui`.
//!
//! Fluent bundles are embedded at compile time (`rust-embed`), selected with
//! `i18n-embed`, and looked up through the `t!` macro, which wraps the compile-time
//! checked `fl!` macro from `i18n-embed-fl`.
//!
//! Layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/cacaosort-ui.ftl   (fallback/reference)
//!   es-ES/cacaosort-ui.ftl
//! ```
//!
//! Usage in a component:
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let label = crate::t!("nav-analytics");
//! let badge = crate::t!("notifications-badge", count = 3);
//! ```
//!
//! Adding a locale: copy `en-US/cacaosort-ui.ftl` to `i18n/<lang-id>/`, translate
//! the values (keep IDs and `$variables`), and run the tests.
//!
//! Desktop and mobile pick the OS locale list; the web build reads
//! `navigator.languages`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation lookup through the shared loader.
///
/// ```ignore
/// t!("analytics-title")
/// t!("analytics-filtering", year = "2024")
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

/// Fluent domain; the fallback bundle is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "cacaosort-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used by `t!`.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Plain strings: labels are rendered as text, never mixed with RTL content.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Load the bundles matching the user's locale (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Tags that don't parse are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language identifiers, sorted.
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
