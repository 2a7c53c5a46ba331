//! Visitor and back-office UI preferences
//!
//! Persisted as JSON in browser local storage under [`STORAGE_KEY`].

use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

pub const STORAGE_KEY: &str = "galerie-preferences";

/// Color scheme of the back-office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub color_scheme: ColorScheme,
    /// Explicit language choice; `None` means "follow the browser"
    #[serde(default)]
    pub lang: Option<Lang>,
}

impl UiPreferences {
    /// Parse stored preferences; any error yields the defaults
    pub fn from_json(raw: Option<&str>) -> Self {
        raw.and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_preferences_fall_back_to_defaults() {
        assert_eq!(UiPreferences::from_json(Some("{not json")), UiPreferences::default());
        assert_eq!(UiPreferences::from_json(None), UiPreferences::default());
    }

    #[test]
    fn test_preferences_survive_storage() {
        let prefs = UiPreferences {
            color_scheme: ColorScheme::Dark,
            lang: Some(Lang::Es),
        };
        assert_eq!(UiPreferences::from_json(Some(&prefs.to_json())), prefs);
    }

    #[test]
    fn test_color_scheme_toggle() {
        assert!(ColorScheme::Light.toggled().is_dark());
        assert_eq!(ColorScheme::from_dark(false), ColorScheme::Light);
    }
}
