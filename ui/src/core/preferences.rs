//! App-lifetime UI configuration (display language and color mode).
//!
//! A single `Preferences` value is created by the platform shell, provided to the
//! component tree as context, and persisted through [`super::storage`].

use serde::{Deserialize, Serialize};

use super::theme::ColorMode;

/// Supported display languages. Japanese is the default audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ja, Locale::En];

    /// Short code carried in registration payloads (`"ja"`, `"en"`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    /// Folder name of the Fluent catalog under `i18n/`.
    pub fn language_tag(self) -> &'static str {
        match self {
            Locale::Ja => "ja-JP",
            Locale::En => "en-US",
        }
    }

    /// Accepts a short code or a full tag; matching is on the primary language subtag.
    pub fn from_code(raw: &str) -> Option<Self> {
        let primary = raw.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        match primary.as_str() {
            "ja" => Some(Locale::Ja),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::Ja => Locale::En,
            Locale::En => Locale::Ja,
        }
    }

    /// Caption of the language switch: names the language a click switches *to*.
    pub fn switch_caption(self) -> &'static str {
        match self.toggled() {
            Locale::Ja => "Ja",
            Locale::En => "En",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub locale: Locale,
    pub color_mode: ColorMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_codes_parse_from_short_and_full_tags() {
        assert_eq!(Locale::from_code("ja"), Some(Locale::Ja));
        assert_eq!(Locale::from_code("ja-JP"), Some(Locale::Ja));
        assert_eq!(Locale::from_code("EN_us"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr-FR"), None);
        assert_eq!(Locale::from_code(""), None);

        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
            assert_eq!(Locale::from_code(locale.language_tag()), Some(locale));
        }
    }

    #[test]
    fn switch_caption_names_the_target_language() {
        assert_eq!(Locale::Ja.switch_caption(), "En");
        assert_eq!(Locale::En.switch_caption(), "Ja");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"color_mode":"dark"}"#).unwrap();
        assert_eq!(prefs.locale, Locale::Ja);
        assert_eq!(prefs.color_mode, ColorMode::Dark);
    }
}
