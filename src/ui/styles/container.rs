// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::{is_dark_theme, ColorScheme, ThemeMode};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scheme(theme: &Theme) -> ColorScheme {
    if is_dark_theme(theme) {
        ColorScheme::for_mode(ThemeMode::Dark)
    } else {
        ColorScheme::for_mode(ThemeMode::Light)
    }
}

/// Card surface used by every content section.
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Page background behind the cards.
pub fn page(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Sticky header bar.
pub fn header(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dark navy band behind the hero and the landing call to action.
pub fn hero(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).hero_background)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Translucent tile laid over the hero.
pub fn hero_tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..palette::WHITE
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Square tinted backdrop for a card icon.
pub fn icon_tile(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..color
        })),
        text_color: Some(color),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round avatar holding author initials.
pub fn avatar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_700)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill-shaped status/category badge.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..color
        })),
        text_color: Some(color),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..color
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Solid badge, e.g. the "Hot" marker on forum posts.
pub fn badge_solid(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Thin colored bar left of a recent report.
pub fn stripe(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Survey progress track.
pub fn progress_track(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).surface_tertiary)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Survey progress fill.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_500)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder panel standing in for the map canvas.
pub fn map_canvas(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CYAN_200)),
        text_color: Some(palette::NAVY_900),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dropdown surface under the compact header menu.
pub fn dropdown(theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::LG,
        ..card(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_follows_theme_surface() {
        let light = card(&ThemeMode::Light.to_theme());
        let dark = card(&ThemeMode::Dark.to_theme());
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn badge_tints_its_color() {
        let style = badge(palette::ERROR_500)(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert!((color.a - opacity::TINT).abs() < f32::EPSILON);
            }
            other => panic!("expected color background, got {other:?}"),
        }
        assert_eq!(style.text_color, Some(palette::ERROR_500));
    }
}
