//! Context plumbing between the platform shells and the shared views.
//!
//! Shells call [`use_preferences_provider`] once at the root and may provide a
//! [`Submitter`]; views read both back through the `use_*` hooks below.

use dioxus::prelude::*;

use crate::core::preferences::{Locale, Preferences};
use crate::core::storage;
use crate::core::submit::Submitter;
use crate::i18n;

/// Saved preferences, or the platform's preferred language when nothing was saved yet.
pub fn initial_preferences() -> Preferences {
    match storage::load_preferences() {
        Ok(Some(saved)) => saved,
        Ok(None) => Preferences {
            locale: i18n::requested_locale().unwrap_or_default(),
            ..Preferences::default()
        },
        Err(err) => {
            tracing::warn!("falling back to default preferences: {err}");
            Preferences::default()
        }
    }
}

/// Create the app-wide preference signal, select its locale, provide it as
/// context, and persist every later change.
pub fn use_preferences_provider() -> Signal<Preferences> {
    let preferences = use_signal(|| {
        let initial = initial_preferences();
        i18n::set_locale(initial.locale);
        initial
    });
    use_context_provider(|| preferences);

    use_effect(move || {
        let current = preferences();
        if let Err(err) = storage::save_preferences(&current) {
            tracing::warn!("could not save preferences: {err}");
        }
    });

    preferences
}

/// Preferences from the shell, or a local default when rendered without one.
pub fn use_preferences() -> Signal<Preferences> {
    let fallback = use_signal(Preferences::default);
    try_use_context::<Signal<Preferences>>().unwrap_or(fallback)
}

/// Current locale. Calling this subscribes the component, so its `t!` strings
/// are rebuilt after a language switch.
pub fn use_locale() -> Locale {
    let preferences = use_preferences();
    preferences().locale
}

/// The catalog is switched before the signal changes so the re-render already
/// reads the new language.
pub fn switch_locale(mut preferences: Signal<Preferences>, locale: Locale) {
    i18n::set_locale(locale);
    preferences.with_mut(|prefs| prefs.locale = locale);
}

pub fn toggle_color_mode(mut preferences: Signal<Preferences>) {
    preferences.with_mut(|prefs| prefs.color_mode = prefs.color_mode.toggled());
}

/// Boundary provided by the shell; logs payloads when none was provided.
pub fn use_submitter() -> Submitter {
    try_use_context::<Submitter>().unwrap_or_else(Submitter::logging)
}
