// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::is_dark_theme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(base: Color, hover: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => hover,
        button::Status::Disabled => palette::GRAY_500,
        button::Status::Active | button::Status::Pressed => base,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: background,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Main call to action (navy).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::NAVY_700, palette::NAVY_500, status)
}

/// Civic green call to action: "Report an Issue", "Join Event".
pub fn accent(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::GREEN_600, palette::GREEN_700, status)
}

/// Outlined button on top of the hero backdrop.
pub fn hero_outline(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_SUBTLE,
        _ => opacity::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            color: WHITE,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Header navigation entry for the active section.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => filled(palette::NAVY_500, palette::NAVY_500, status),
        _ => filled(palette::NAVY_700, palette::NAVY_700, button::Status::Active),
    }
}

/// Borderless button: header navigation, icon buttons, card links.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = is_dark_theme(theme);
    let text_color = if is_dark { WHITE } else { palette::GRAY_900 };
    let hover_bg = if is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_100
    };

    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(hover_bg))
            }
            _ => None,
        },
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Secondary action with an outline that follows the theme.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = is_dark_theme(theme);
    let (text_color, border_color) = if is_dark {
        (WHITE, palette::GRAY_500)
    } else {
        (palette::GRAY_900, palette::GRAY_200)
    };

    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(
                if is_dark {
                    palette::GRAY_700
                } else {
                    palette::GRAY_100
                },
            )),
            _ => None,
        },
        text_color,
        border: Border {
            color: if matches!(status, button::Status::Hovered) {
                palette::NAVY_500
            } else {
                border_color
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Tab or chip for the current selection (community tabs, map categories,
/// issue types).
pub fn tab_selected(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::NAVY_700)),
        text_color: WHITE,
        border: Border {
            color: palette::NAVY_700,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Tab or chip that is not selected.
pub fn tab_unselected(theme: &Theme, status: button::Status) -> button::Style {
    outline(theme, status)
}
