// SPDX-License-Identifier: MPL-2.0
//! City map section: place filters, the map placeholder, nearby places and
//! nearby issues.

use crate::domain::places::{
    filter_places, NearbyIssue, Place, PlaceCategory, Severity, NEARBY_ISSUES, PLACES,
};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::layout::{self, SEMIBOLD};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, pick_list, text_input, Column, Container, Row, Space, Text},
    Color, Element, Length,
};

#[derive(Debug, Clone, Default)]
pub struct State {
    category: PlaceCategory,
    query: String,
}

impl State {
    #[must_use]
    pub fn category(&self) -> PlaceCategory {
        self.category
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn visible_places(&self) -> Vec<&'static Place> {
        filter_places(&PLACES, self.category, &self.query)
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(PlaceCategory),
    QueryChanged(String),
    GetDirections,
    Route(&'static str),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Notify(Notification),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::CategorySelected(category) => {
            state.category = category;
            Event::None
        }
        Message::QueryChanged(query) => {
            state.query = query;
            Event::None
        }
        Message::GetDirections => Event::Notify(
            Notification::info("map-directions-title").with_detail("map-directions-detail"),
        ),
        Message::Route(name) => Event::Notify(
            Notification::info("map-route-title")
                .with_detail("map-route-detail")
                .with_arg("name", name),
        ),
    }
}

fn category_glyph(category: PlaceCategory) -> &'static str {
    match category {
        PlaceCategory::All => "📍",
        PlaceCategory::Transport => "🚌",
        PlaceCategory::Healthcare => "🏥",
        PlaceCategory::Education => "🎓",
        PlaceCategory::Parks => "🌳",
        PlaceCategory::Government => "🏛",
        PlaceCategory::Dining => "☕",
        PlaceCategory::Services => "🔧",
    }
}

#[must_use]
pub fn category_color(category: PlaceCategory) -> Color {
    match category {
        PlaceCategory::All | PlaceCategory::Services => palette::GRAY_500,
        PlaceCategory::Transport => palette::NAVY_500,
        PlaceCategory::Healthcare => palette::ERROR_500,
        PlaceCategory::Education => palette::PURPLE_600,
        PlaceCategory::Parks => palette::GREEN_600,
        PlaceCategory::Government => palette::INDIGO_600,
        PlaceCategory::Dining => palette::ORANGE_600,
    }
}

#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => palette::ERROR_500,
        Severity::Medium => palette::WARNING_500,
        Severity::Low => palette::SUCCESS_500,
    }
}

/// Wrapper for PlaceCategory to implement Display for pick_list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CategoryOption {
    category: PlaceCategory,
    label: String,
}

impl std::fmt::Display for CategoryOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", category_glyph(self.category), self.label)
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let sidebar = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(1))
        .push(build_filters(&ctx))
        .push(build_quick_categories(i18n, ctx.state.category))
        .push(build_nearby_issues(i18n));

    let main = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(3))
        .push(build_map_placeholder(i18n))
        .push(build_places(i18n, &ctx.state.visible_places()));

    layout::page(
        Column::new()
            .spacing(spacing::XL)
            .push(layout::page_heading(
                i18n.tr("map-title"),
                i18n.tr("map-lead"),
            ))
            .push(Row::new().spacing(spacing::LG).push(sidebar).push(main)),
    )
}

fn build_filters<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let options: Vec<CategoryOption> = PlaceCategory::ALL
        .into_iter()
        .map(|category| CategoryOption {
            category,
            label: i18n.tr(category.label_key()),
        })
        .collect();
    let selected = options
        .iter()
        .find(|opt| opt.category == ctx.state.category)
        .cloned();

    layout::card(
        Column::new()
            .spacing(spacing::SM)
            .push(layout::title(i18n.tr("map-filter-title")))
            .push(
                text_input(&i18n.tr("map-search-placeholder"), ctx.state.query())
                    .on_input(Message::QueryChanged)
                    .padding(spacing::XS),
            )
            .push(
                pick_list(options, selected, |opt| {
                    Message::CategorySelected(opt.category)
                })
                .placeholder(i18n.tr("map-category-placeholder"))
                .padding(spacing::XS)
                .width(Length::Fill),
            ),
    )
    .into()
}

fn build_quick_categories<'a>(i18n: &I18n, active: PlaceCategory) -> Element<'a, Message> {
    let buttons = PlaceCategory::ALL
        .into_iter()
        .skip(1)
        .map(|category| -> Element<'a, Message> {
            let style = if category == active {
                styles::button::selected
            } else {
                styles::button::outline
            };
            button(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center)
                    .push(Text::new(category_glyph(category)))
                    .push(Text::new(i18n.tr(category.label_key())).size(typography::CAPTION)),
            )
            .on_press(Message::CategorySelected(category))
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(style)
            .into()
        })
        .collect();

    layout::card(
        Column::new()
            .spacing(spacing::SM)
            .push(layout::title(i18n.tr("map-quick-title")))
            .push(layout::grid(buttons, 2)),
    )
    .into()
}

fn build_nearby_issues<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(layout::title(i18n.tr("map-issues-title")))
        .push(layout::muted(i18n.tr("map-issues-lead"), typography::BODY_SM));

    for issue in &NEARBY_ISSUES {
        column = column.push(build_issue(i18n, issue));
    }

    layout::card(column).into()
}

fn build_issue<'a>(i18n: &I18n, issue: &NearbyIssue) -> Element<'a, Message> {
    let color = severity_color(issue.severity);

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Row::new()
                    .align_y(Vertical::Center)
                    .push(Text::new(issue.title).size(typography::BODY_SM).font(SEMIBOLD))
                    .push(Space::new().width(Length::Fill))
                    .push(layout::badge(i18n.tr(issue.state.label_key()), color)),
            )
            .push(layout::muted(issue.location.to_string(), typography::CAPTION))
            .push(layout::colored(
                i18n.tr(issue.severity.label_key()),
                typography::CAPTION,
                color,
            )),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::badge(color))
    .into()
}

fn build_map_placeholder<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(layout::colored(
            "📍".to_string(),
            typography::DISPLAY,
            palette::NAVY_700,
        ))
        .push(layout::title(i18n.tr("map-view-title")))
        .push(layout::muted(i18n.tr("map-view-lead"), typography::BODY_SM))
        .push(
            button(Text::new(format!("🧭 {}", i18n.tr("map-get-directions"))))
                .on_press(Message::GetDirections)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::accent),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MAP_HEIGHT))
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::map_canvas)
        .into()
}

fn build_places<'a>(i18n: &I18n, places: &[&'static Place]) -> Element<'a, Message> {
    let heading = Row::new()
        .align_y(Vertical::Center)
        .push(layout::title(i18n.tr("map-places-title")))
        .push(Space::new().width(Length::Fill))
        .push(layout::badge_solid(
            i18n.tr_count("map-places-found", places.len()),
            palette::NAVY_700,
        ));

    let mut column = Column::new().spacing(spacing::MD).push(heading);
    if places.is_empty() {
        column = column.push(layout::muted(i18n.tr("map-no-results"), typography::BODY));
    }
    for place in places {
        column = column.push(build_place(i18n, place));
    }

    layout::card(column).into()
}

fn build_place<'a>(i18n: &I18n, place: &'static Place) -> Element<'a, Message> {
    let color = category_color(place.category);

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(Text::new(place.name).font(SEMIBOLD))
                .push(Space::new().width(Length::Fill))
                .push(layout::badge(i18n.tr(place.category.label_key()), color)),
        )
        .push(layout::muted(place.address.to_string(), typography::BODY_SM))
        .push(
            Row::new()
                .push(layout::muted(place.distance.to_string(), typography::CAPTION))
                .push(Space::new().width(Length::Fill))
                .push(layout::muted(place.hours.to_string(), typography::CAPTION)),
        );

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(layout::icon_tile(category_glyph(place.category), color))
        .push(details)
        .push(
            button(Text::new(format!("🧭 {}", i18n.tr("map-route"))).size(typography::BODY_SM))
                .on_press(Message::Route(place.name))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::outline),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_view_renders_with_and_without_results() {
        let i18n = I18n::default();
        let mut state = State::default();
        drop(view(ViewContext {
            i18n: &i18n,
            state: &state,
        }));

        update(&mut state, Message::QueryChanged("nowhere".into()));
        assert!(state.visible_places().is_empty());
        drop(view(ViewContext {
            i18n: &i18n,
            state: &state,
        }));
    }

    #[test]
    fn category_and_query_combine() {
        let mut state = State::default();
        update(&mut state, Message::CategorySelected(PlaceCategory::Government));
        assert_eq!(state.visible_places().len(), 2);

        update(&mut state, Message::QueryChanged("fire".into()));
        let places = state.visible_places();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Fire Station #3");
    }

    #[test]
    fn route_toast_names_the_place() {
        let i18n = I18n::default();
        let mut state = State::default();
        match update(&mut state, Message::Route("City Hall")) {
            Event::Notify(n) => {
                assert_eq!(n.title_key(), "map-route-title");
                assert_eq!(
                    i18n.tr_with_args(n.title_key(), &[("name", "City Hall")]),
                    "Route to City Hall"
                );
            }
            other => panic!("expected a toast, got {other:?}"),
        }
    }

    #[test]
    fn found_badge_counts_places() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr_count("map-places-found", PLACES.len()), "6 found");
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(severity_color(Severity::High), severity_color(Severity::Medium));
        assert_ne!(severity_color(Severity::Medium), severity_color(Severity::Low));
    }
}
