// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use citysync::ui::design_tokens::{palette, sizing, spacing};
    use citysync::ui::styles::{button, container};
    use citysync::ui::theming::{is_dark_theme, ColorScheme, ThemeMode};
    use iced::widget::button::Status;

    #[test]
    fn all_button_styles_work_in_both_themes() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let theme = mode.to_theme();
            for style in [
                button::primary,
                button::accent,
                button::hero_outline,
                button::selected,
                button::ghost,
                button::outline,
                button::tab_selected,
                button::tab_unselected,
            ] {
                for status in [
                    Status::Active,
                    Status::Hovered,
                    Status::Pressed,
                    Status::Disabled,
                ] {
                    let _ = style(&theme, status);
                }
            }
        }
    }

    #[test]
    fn container_styles_follow_theme() {
        let light = ThemeMode::Light.to_theme();
        let dark = ThemeMode::Dark.to_theme();
        assert_ne!(container::card(&light).background, container::card(&dark).background);
        let _ = container::badge(palette::NAVY_500)(&light);
        let _ = container::stripe(palette::SUCCESS_500)(&dark);
    }

    #[test]
    fn built_themes_report_their_mode() {
        assert!(!is_dark_theme(&ThemeMode::Light.to_theme()));
        assert!(is_dark_theme(&ThemeMode::Dark.to_theme()));
    }

    #[test]
    fn layout_tokens_are_consistent() {
        assert!(sizing::CONTENT_MAX_WIDTH > sizing::COMPACT_BREAKPOINT);
        assert!(sizing::TOAST_WIDTH < sizing::COMPACT_BREAKPOINT);
        assert!(spacing::XS < spacing::MD);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        // Surfaces and text invert between modes.
        assert!(light.surface_primary.r > dark.surface_primary.r);
        assert!(light.text_primary.r < dark.text_primary.r);
    }
}
