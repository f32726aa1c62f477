// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management and Iced theme construction.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
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
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The mode the navbar toggle switches to from `self`.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

/// Builds the branded Iced theme for the given mode.
#[must_use]
pub fn iced_theme(mode: ThemeMode) -> Theme {
    if mode.is_dark() {
        Theme::custom(
            "Chatore Dark".to_string(),
            Palette {
                background: palette::MAROON_900,
                text: palette::WHITE,
                primary: palette::SAFFRON_500,
                success: palette::SUCCESS_500,
                danger: palette::ERROR_500,
            },
        )
    } else {
        Theme::custom(
            "Chatore Light".to_string(),
            Palette {
                background: palette::WHITE,
                text: palette::GRAY_900,
                primary: palette::MAROON_500,
                success: palette::SUCCESS_500,
                danger: palette::ERROR_500,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on the actual system theme; just verify it
        // doesn't panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn toggle_flips_between_light_and_dark() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn themes_build_for_both_modes() {
        let _dark = iced_theme(ThemeMode::Dark);
        let _light = iced_theme(ThemeMode::Light);
    }
}
