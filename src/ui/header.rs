// SPDX-License-Identifier: MPL-2.0
//! Application header.
//!
//! Brand block, one navigation entry per section, the notifications and theme
//! buttons. On narrow windows the navigation collapses into a menu button
//! that opens a dropdown.

use crate::app::section::SectionId;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: SectionId,
    pub menu_open: bool,
    /// Window too narrow for the inline navigation.
    pub compact: bool,
    pub is_dark: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(SectionId),
    ToggleMenu,
    ShowUpdates,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(SectionId),
    ShowUpdates,
    ToggleTheme,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::Navigate(section)
        }
        Message::ShowUpdates => Event::ShowUpdates,
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_brand<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mark = Container::new(Text::new("📍").size(typography::TITLE_MD))
        .width(Length::Fixed(sizing::BRAND_MARK))
        .height(Length::Fixed(sizing::BRAND_MARK))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::NAVY_700.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let words = Column::new()
        .push(Text::new(i18n.tr("app-name")).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr("app-tagline"))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_500),
                }),
        );

    button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(mark)
            .push(words),
    )
    .on_press(Message::Navigate(SectionId::Home))
    .padding(spacing::XXS)
    .style(styles::button::ghost)
    .into()
}

fn nav_button<'a>(i18n: &I18n, section: SectionId, active: SectionId) -> Element<'a, Message> {
    let style = if section == active {
        styles::button::selected
    } else {
        styles::button::ghost
    };

    button(Text::new(i18n.tr(section.label_key())).size(typography::BODY))
        .on_press(Message::Navigate(section))
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::LG])
        .align_y(Vertical::Center)
        .push(build_brand(ctx.i18n))
        .push(Space::new().width(Length::Fill));

    if !ctx.compact {
        for section in SectionId::ALL {
            row = row.push(nav_button(ctx.i18n, section, ctx.active));
        }
    }

    let theme_glyph = if ctx.is_dark { "☀" } else { "☾" };
    row = row
        .push(
            button(Text::new("🔔"))
                .on_press(Message::ShowUpdates)
                .padding(spacing::XS)
                .style(styles::button::ghost),
        )
        .push(
            button(Text::new(theme_glyph))
                .on_press(Message::ToggleTheme)
                .padding(spacing::XS)
                .style(styles::button::ghost),
        );

    if ctx.compact {
        let menu_glyph = if ctx.menu_open { "✕" } else { "☰" };
        row = row.push(
            button(Text::new(menu_glyph))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::ghost),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::header)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = SectionId::ALL.into_iter().map(|section| -> Element<'a, Message> {
        let label = Text::new(ctx.i18n.tr(section.label_key()));
        let style = if section == ctx.active {
            styles::button::selected
        } else {
            menu_item_style
        };
        button(label)
            .on_press(Message::Navigate(section))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(style)
            .into()
    });

    Container::new(Column::with_children(items).spacing(spacing::XXS))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::dropdown)
        .into()
}

fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered => Some(palette.background.strong.color.into()),
        button::Status::Pressed => Some(palette.primary.strong.color.into()),
        button::Status::Active | button::Status::Disabled => None,
    };
    let text_color = match status {
        button::Status::Pressed => palette.primary.strong.text,
        _ => palette.background.base.text,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
