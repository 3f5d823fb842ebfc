// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,

    /// Background of the default button variant and idle pills.
    pub control: Color,
    pub control_hover: Color,

    /// Background of the dark variant (selected pill, badges).
    pub control_strong: Color,
    pub control_strong_hover: Color,
    pub control_strong_text: Color,

    /// Hover background of ghost buttons.
    pub ghost_hover: Color,

    pub accent: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::NEUTRAL_50,

            text_primary: palette::NEUTRAL_950,
            text_secondary: palette::SECONDARY_TEXT,

            control: palette::SECONDARY,
            control_hover: palette::SECONDARY_HOVER,

            control_strong: palette::SECONDARY_DARK,
            control_strong_hover: palette::SECONDARY_DARK_HOVER,
            control_strong_text: palette::SECONDARY,

            ghost_hover: palette::GHOST_HOVER,

            accent: palette::BRAND_RED,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::NEUTRAL_950,
            surface_secondary: palette::NEUTRAL_900,

            text_primary: palette::NEUTRAL_50,
            text_secondary: palette::NEUTRAL_400,

            control: palette::NEUTRAL_800,
            control_hover: palette::NEUTRAL_700,

            control_strong: palette::NEUTRAL_100,
            control_strong_hover: palette::WHITE,
            control_strong_text: palette::NEUTRAL_900,

            ghost_hover: palette::NEUTRAL_800,

            accent: palette::BRAND_RED,
        }
    }

    /// Scheme matching the light/dark flavor of an Iced theme.
    #[must_use]
    pub fn for_theme(theme: &iced::Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

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
            // A browsing page reads best light; only an explicit dark OS wins.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// The Iced theme this mode resolves to.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
