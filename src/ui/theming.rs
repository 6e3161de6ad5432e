// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detection errors fall back to dark.
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Stock Iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Muted text color that stays readable on both stock themes.
#[must_use]
pub fn muted_text(theme: &Theme) -> Color {
    if theme.extended_palette().is_dark {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the host; only checks detection does not panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_map_to_stock_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }

    #[test]
    fn theme_mode_reads_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let wrapper: Wrapper = toml::from_str("mode = \"dark\"").expect("deserialize");
        assert_eq!(wrapper.mode, ThemeMode::Dark);
        assert!(toml::from_str::<Wrapper>("mode = \"Dark\"").is_err());
    }
}
