//! Internationalization (i18n) support for `carematch-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/carematch-ui.ftl   (fallback/reference)
//!   ja-JP/carematch-ui.ftl   (default audience)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let home_label = t!("nav-home");
//! // Keys only known at runtime (catalog labels, notices):
//! let label = crate::i18n::tr(skill.label_key());
//! ```
//!
//! The active language follows [`Preferences::locale`](crate::core::preferences::Preferences);
//! the shells call [`set_locale`] whenever it changes.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::preferences::Locale;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("footer-copyright", year = 2025)
///
/// Expands to `fl!(&*LOADER, ...)`, so literal keys are checked against the
/// fallback catalog at compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "carematch-ui";

const FALLBACK: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(new_loader);

static INIT: Once = Once::new();

fn new_loader() -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Japanese strings read badly with bidi isolation marks around placeables.
    loader.set_use_isolating(false);
    loader
}

/// Load the default locale (idempotent). Shells switch to the saved locale right after.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = select(&LOADER, Locale::default()) {
            tracing::warn!(
                "[i18n] failed selecting default language ({err}); continuing with fallback"
            );
        }
    });
}

/// Switch the process-wide catalog to `locale`.
pub fn set_locale(locale: Locale) {
    init();
    match select(&LOADER, locale) {
        Ok(()) => tracing::debug!("[i18n] language set to {}", locale.language_tag()),
        Err(err) => tracing::warn!("[i18n] could not switch to {}: {err}", locale.language_tag()),
    }
}

/// Look up a message whose id is only known at runtime.
pub fn tr(key: &str) -> String {
    LOADER.get(key)
}

/// First supported locale among the platform's preferred languages
/// (`navigator.languages` on web, OS locale list on desktop).
pub fn requested_locale() -> Option<Locale> {
    requested_languages()
        .iter()
        .find_map(|lang| Locale::from_code(&lang.to_string()))
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

fn select(loader: &FluentLanguageLoader, locale: Locale) -> Result<(), i18n_embed::I18nEmbedError> {
    match locale.language_tag().parse::<LanguageIdentifier>() {
        Ok(lang) => i18n_embed::select(loader, &Localizations, &[lang]).map(|_| ()),
        Err(err) => {
            tracing::warn!("[i18n] invalid language tag {}: {err}", locale.language_tag());
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
