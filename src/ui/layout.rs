// SPDX-License-Identifier: MPL-2.0
//! Building blocks shared by the section views: page frame, cards, grids,
//! badges and text helpers.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{scrollable, text, Column, Container, Row, Space, Text},
    Color, Element, Font, Length, Theme,
};

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

/// Scrollable page with centered, width-capped content.
pub fn page<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    let centered = Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([spacing::LG, spacing::MD]),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    Container::new(scrollable(centered).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

/// White (or dark) card with the standard padding.
pub fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Container<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
}

/// Lays `items` out in rows of `columns` equal-width cells. The last row is
/// padded with empty cells so widths stay aligned.
pub fn grid<'a, M: 'a>(items: Vec<Element<'a, M>>, columns: usize) -> Element<'a, M> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::MD);
    let mut items = items.into_iter().peekable();

    while items.peek().is_some() {
        let mut row = Row::new().spacing(spacing::MD);
        for _ in 0..columns {
            row = match items.next() {
                Some(item) => row.push(Container::new(item).width(Length::FillPortion(1))),
                None => row.push(Space::new().width(Length::FillPortion(1))),
            };
        }
        rows = rows.push(row);
    }

    rows.into()
}

/// Pill badge tinted with `color`.
pub fn badge<'a, M: 'a>(label: String, color: Color) -> Element<'a, M> {
    Container::new(Text::new(label).size(typography::CAPTION).font(SEMIBOLD))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge(color))
        .into()
}

/// Solid pill badge.
pub fn badge_solid<'a, M: 'a>(label: String, color: Color) -> Element<'a, M> {
    Container::new(Text::new(label).size(typography::CAPTION).font(SEMIBOLD))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge_solid(color))
        .into()
}

/// Page heading with its lead paragraph, centered.
pub fn page_heading<'a, M: 'a>(title: String, lead: String) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_LG).font(BOLD))
        .push(muted(lead, typography::BODY_LG))
        .into()
}

/// Card heading.
pub fn title<'a>(content: String) -> Text<'a> {
    Text::new(content).size(typography::TITLE_SM).font(SEMIBOLD)
}

/// Secondary text that follows the theme.
pub fn muted<'a>(content: String, size: f32) -> Text<'a> {
    Text::new(content).size(size).style(|theme: &Theme| text::Style {
        color: Some(Color {
            a: 0.7,
            ..theme.palette().text
        }),
    })
}

/// Text in a fixed color.
pub fn colored<'a>(content: String, size: f32, color: Color) -> Text<'a> {
    Text::new(content)
        .size(size)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
}

/// Square icon tile tinted with `color`.
pub fn icon_tile<'a, M: 'a>(glyph: &'a str, color: Color) -> Element<'a, M> {
    Container::new(Text::new(glyph).size(typography::TITLE_MD))
        .width(Length::Fixed(sizing::ICON_LG + spacing::MD))
        .height(Length::Fixed(sizing::ICON_LG + spacing::MD))
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(styles::container::icon_tile(color))
        .into()
}

/// Horizontal bar filled to `fraction` (clamped to `0..=1`).
pub fn progress_bar<'a, M: 'a>(fraction: f32) -> Element<'a, M> {
    let fraction = fraction.clamp(0.0, 1.0);
    // FillPortion works on integers; per-mille keeps enough precision.
    let filled = (fraction * 1000.0).round() as u16;
    let mut row = Row::new().height(Length::Fixed(sizing::PROGRESS_HEIGHT));
    if filled > 0 {
        row = row.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::container::progress_fill),
        );
    }
    if filled < 1000 {
        row = row.push(Space::new().width(Length::FillPortion(1000 - filled)));
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::progress_track)
        .into()
}

/// Labelled form field: caption above the widget.
pub fn field<'a, M: 'a>(label: String, input: impl Into<Element<'a, M>>) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM).font(SEMIBOLD))
        .push(input)
        .into()
}
