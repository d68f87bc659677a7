// SPDX-License-Identifier: MPL-2.0
//! Home section: hero banner, feature overview and call to action.

use crate::app::section::SectionId;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::layout::{self, BOLD};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Color, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    ReportIssue,
    JoinCommunity,
    GetStarted,
    LearnMore,
}

#[derive(Debug, Clone)]
pub enum Event {
    Navigate(SectionId),
    Notify(Notification),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::ReportIssue | Message::GetStarted => Event::Navigate(SectionId::Report),
        Message::JoinCommunity => Event::Navigate(SectionId::Community),
        Message::LearnMore => Event::Notify(
            Notification::info("landing-learn-more-title").with_detail("landing-learn-more-detail"),
        ),
    }
}

/// (glyph, title key, description key)
static QUICK_CARDS: [(&str, &str, &str); 3] = [
    ("📍", "hero-card-reporting", "hero-card-reporting-detail"),
    ("👥", "hero-card-community", "hero-card-community-detail"),
    ("🛡", "hero-card-secure", "hero-card-secure-detail"),
];

/// (glyph, accent, title key, description key, badge key)
static FEATURES: [(&str, Color, &str, &str, &str); 6] = [
    (
        "📷",
        palette::NAVY_500,
        "feature-reporting-title",
        "feature-reporting-detail",
        "feature-badge-core",
    ),
    (
        "👥",
        palette::GREEN_600,
        "feature-engagement-title",
        "feature-engagement-detail",
        "feature-badge-community",
    ),
    (
        "🔔",
        palette::PURPLE_600,
        "feature-info-title",
        "feature-info-detail",
        "feature-badge-updates",
    ),
    (
        "🗺",
        palette::ORANGE_600,
        "feature-maps-title",
        "feature-maps-detail",
        "feature-badge-navigation",
    ),
    (
        "💬",
        palette::INDIGO_600,
        "feature-forums-title",
        "feature-forums-detail",
        "feature-badge-social",
    ),
    (
        "🔒",
        palette::EMERALD_600,
        "feature-secure-title",
        "feature-secure-detail",
        "feature-badge-security",
    ),
];

/// (glyph, value key, label key)
static STATS: [(&str, &str, &str); 4] = [
    ("🕑", "stat-availability-value", "stat-availability"),
    ("📱", "stat-mobile-value", "stat-mobile"),
    ("🌐", "stat-language-value", "stat-language"),
    ("👥", "stat-members-value", "stat-members"),
];

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXL)
        .push(build_hero(ctx.i18n))
        .push(build_features(ctx.i18n))
        .push(build_stats(ctx.i18n))
        .push(build_cta(ctx.i18n));

    layout::page(content)
}

fn build_hero<'a>(i18n: &I18n) -> Element<'a, Message> {
    let eyebrow = Container::new(layout::colored(
        format!("🧭 {}", i18n.tr("hero-eyebrow")),
        typography::BODY_SM,
        palette::GREEN_300,
    ))
    .padding([spacing::XXS, spacing::MD])
    .style(styles::container::hero_tile);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(format!("📷 {}", i18n.tr("hero-report-button"))))
                .on_press(Message::ReportIssue)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::accent),
        )
        .push(
            button(Text::new(format!("👥 {}", i18n.tr("hero-community-button"))))
                .on_press(Message::JoinCommunity)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::hero_outline),
        );

    let cards = QUICK_CARDS
        .iter()
        .map(|(glyph, title_key, detail_key)| -> Element<'a, Message> {
            Container::new(
                Column::new()
                    .spacing(spacing::XXS)
                    .align_x(Horizontal::Center)
                    .push(layout::colored(
                        (*glyph).to_string(),
                        typography::TITLE_LG,
                        palette::GREEN_300,
                    ))
                    .push(Text::new(i18n.tr(title_key)).font(BOLD))
                    .push(Text::new(i18n.tr(detail_key)).size(typography::CAPTION)),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .style(styles::container::hero_tile)
            .into()
        })
        .collect();

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(eyebrow)
        .push(
            Text::new(i18n.tr("app-name"))
                .size(typography::DISPLAY)
                .font(BOLD),
        )
        .push(layout::colored(
            i18n.tr("hero-slogan"),
            typography::TITLE_MD,
            palette::CYAN_200,
        ))
        .push(
            Text::new(i18n.tr("hero-lead")).size(typography::BODY_LG),
        )
        .push(actions)
        .push(layout::grid(cards, 3));

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .style(styles::container::hero)
        .into()
}

fn build_features<'a>(i18n: &I18n) -> Element<'a, Message> {
    let cards = FEATURES
        .iter()
        .map(
            |(glyph, accent, title_key, detail_key, badge_key)| -> Element<'a, Message> {
                let top = Row::new()
                    .push(layout::icon_tile(*glyph, *accent))
                    .push(iced::widget::Space::new().width(Length::Fill))
                    .push(layout::badge(i18n.tr(badge_key), *accent));

                layout::card(
                    Column::new()
                        .spacing(spacing::SM)
                        .push(top)
                        .push(layout::title(i18n.tr(title_key)))
                        .push(layout::muted(i18n.tr(detail_key), typography::BODY)),
                )
                .height(Length::Fill)
                .into()
            },
        )
        .collect();

    Column::new()
        .spacing(spacing::LG)
        .push(layout::page_heading(
            i18n.tr("features-title"),
            i18n.tr("features-lead"),
        ))
        .push(layout::grid(cards, 3))
        .into()
}

fn build_stats<'a>(i18n: &I18n) -> Element<'a, Message> {
    let cells = STATS
        .iter()
        .map(|(glyph, value_key, label_key)| -> Element<'a, Message> {
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .push(layout::icon_tile(*glyph, palette::NAVY_500))
                .push(Text::new(i18n.tr(value_key)).size(typography::TITLE_SM).font(BOLD))
                .push(layout::muted(i18n.tr(label_key), typography::BODY_SM))
                .into()
        })
        .collect();

    layout::card(
        Column::new()
            .spacing(spacing::LG)
            .push(layout::page_heading(
                i18n.tr("stats-title"),
                i18n.tr("stats-lead"),
            ))
            .push(layout::grid(cells, 4)),
    )
    .into()
}

fn build_cta<'a>(i18n: &I18n) -> Element<'a, Message> {
    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(format!("📱 {}", i18n.tr("cta-get-started"))))
                .on_press(Message::GetStarted)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("cta-learn-more")))
                .on_press(Message::LearnMore)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline),
        );

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(layout::page_heading(
            i18n.tr("cta-title"),
            i18n.tr("cta-lead"),
        ))
        .push(actions)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn hero_buttons_navigate() {
        assert!(matches!(
            update(Message::ReportIssue),
            Event::Navigate(SectionId::Report)
        ));
        assert!(matches!(
            update(Message::JoinCommunity),
            Event::Navigate(SectionId::Community)
        ));
        assert!(matches!(
            update(Message::GetStarted),
            Event::Navigate(SectionId::Report)
        ));
    }

    #[test]
    fn learn_more_shows_a_toast() {
        match update(Message::LearnMore) {
            Event::Notify(notification) => {
                assert_eq!(notification.title_key(), "landing-learn-more-title");
            }
            other => panic!("expected a notification, got {other:?}"),
        }
    }

    #[test]
    fn every_landing_key_is_translated() {
        let i18n = I18n::default();
        let keys = QUICK_CARDS
            .iter()
            .flat_map(|(_, a, b)| [*a, *b])
            .chain(FEATURES.iter().flat_map(|(_, _, a, b, c)| [*a, *b, *c]))
            .chain(STATS.iter().flat_map(|(_, a, b)| [*a, *b]));
        for key in keys {
            assert!(!i18n.tr(key).starts_with("MISSING"), "missing {key}");
        }
    }
}
