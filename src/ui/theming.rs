// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::{theme, Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_accent: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    /// Backdrop behind the landing hero text.
    pub hero_background: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_tertiary: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_500,

            brand_primary: palette::NAVY_700,
            brand_accent: palette::GREEN_600,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            hero_background: palette::NAVY_900,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.11, 0.14, 0.2),
            surface_tertiary: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::NAVY_500,
            brand_accent: palette::GREEN_300,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            hero_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::NAVY_900
            },
        }
    }

    /// Scheme matching the effective mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
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
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The explicit mode opposite to the effective one. Toggling always
    /// leaves `System` behind.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Builds the iced theme for this mode with the CitySync brand colors.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        let scheme = ColorScheme::for_mode(self);
        let name = if self.is_dark() {
            "CitySync Dark"
        } else {
            "CitySync Light"
        };
        Theme::custom(
            name.to_string(),
            theme::Palette {
                background: scheme.surface_primary,
                text: scheme.text_primary,
                primary: scheme.brand_primary,
                success: scheme.success,
                warning: scheme.warning,
                danger: scheme.error,
            },
        )
    }
}

/// Whether an iced theme built by [`ThemeMode::to_theme`] is dark.
#[must_use]
pub fn is_dark_theme(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn both_schemes_keep_a_blue_brand() {
        assert!(ColorScheme::light().brand_primary.b > ColorScheme::light().brand_primary.r);
        assert!(ColorScheme::dark().brand_primary.b > ColorScheme::dark().brand_primary.r);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the host; must not panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn toggled_flips_explicit_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_ne!(ThemeMode::System.toggled(), ThemeMode::System);
    }

    #[test]
    fn to_theme_tracks_darkness() {
        assert!(is_dark_theme(&ThemeMode::Dark.to_theme()));
        assert!(!is_dark_theme(&ThemeMode::Light.to_theme()));
    }
}
