//! Light/dark color mode. The palettes themselves are CSS custom properties in
//! `assets/theme/main.css`, switched by the `data-theme` attribute on the app root.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Value of the `data-theme` attribute on the app root.
    pub fn data_theme(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Accessible label for the toggle button, describing what a click will do.
    pub fn toggle_label_key(self) -> &'static str {
        match self {
            ColorMode::Light => "nav-switch-to-dark",
            ColorMode::Dark => "nav-switch-to-light",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ColorMode::Light => "☀",
            ColorMode::Dark => "☾",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn toggle_label_describes_the_other_mode() {
        assert_eq!(ColorMode::Light.toggle_label_key(), "nav-switch-to-dark");
        assert_eq!(ColorMode::Dark.toggle_label_key(), "nav-switch-to-light");
    }
}
