// SPDX-License-Identifier: MPL-2.0
//! Issue reporting section: the report form, tips and recent reports.
//!
//! Submitting validates the draft. A complete draft produces a success toast
//! and clears the whole form; an incomplete one produces an error toast and
//! leaves the form untouched.

use crate::domain::issues::{IssueDraft, IssueType, ReportStatus, RECENT_REPORTS};
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, palette, sizing, spacing, typography};
use crate::ui::layout::{self, SEMIBOLD};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, text_input, Column, Container, Row, Space, Text},
    Color, Element, Length,
};

/// Form state. The shell drops it when the user leaves the section.
#[derive(Debug, Clone, Default)]
pub struct State {
    draft: IssueDraft,
}

impl State {
    #[must_use]
    pub fn draft(&self) -> &IssueDraft {
        &self.draft
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    IssueTypeSelected(IssueType),
    LocationChanged(String),
    DescriptionChanged(String),
    NameChanged(String),
    EmailChanged(String),
    UseCurrentLocation,
    Submit,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Notify(Notification),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::IssueTypeSelected(issue_type) => state.draft.issue_type = Some(issue_type),
        Message::LocationChanged(value) => state.draft.location = value,
        Message::DescriptionChanged(value) => state.draft.description = value,
        Message::NameChanged(value) => state.draft.name = value,
        Message::EmailChanged(value) => state.draft.email = value,
        Message::UseCurrentLocation => {
            return Event::Notify(
                Notification::info("report-location-unavailable-title")
                    .with_detail("report-location-unavailable-detail"),
            );
        }
        Message::Submit => return submit(state),
    }
    Event::None
}

fn submit(state: &mut State) -> Event {
    match state.draft.validate() {
        Ok(report) => {
            tracing::info!(
                issue_type = report.issue_type.as_str(),
                location = %report.location,
                "issue report submitted"
            );
            state.draft = IssueDraft::default();
            Event::Notify(
                Notification::success("report-success-title").with_detail("report-success-detail"),
            )
        }
        Err(missing) => {
            tracing::debug!(?missing, "incomplete issue report");
            Event::Notify(
                Notification::error("report-error-title").with_detail("report-error-detail"),
            )
        }
    }
}

/// Wrapper for IssueType to implement Display for pick_list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IssueTypeOption {
    issue_type: IssueType,
    label: String,
}

impl std::fmt::Display for IssueTypeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", issue_glyph(self.issue_type), self.label)
    }
}

fn issue_glyph(issue_type: IssueType) -> &'static str {
    match issue_type {
        IssueType::Pothole => "🛣",
        IssueType::Streetlight => "💡",
        IssueType::Waste => "🗑",
        IssueType::Water => "💧",
        IssueType::Parks => "🌳",
        IssueType::Traffic => "🚦",
        IssueType::Other => "📝",
    }
}

/// Accent color and glyph for a report status.
#[must_use]
pub fn status_style(status: ReportStatus) -> (Color, &'static str) {
    match status {
        ReportStatus::Resolved => (palette::SUCCESS_500, "✔"),
        ReportStatus::InProgress => (palette::NAVY_500, "🕑"),
        ReportStatus::Pending => (palette::ORANGE_600, "⚠"),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body = Row::new()
        .spacing(spacing::LG)
        .push(Container::new(build_form(&ctx)).width(Length::FillPortion(2)))
        .push(
            Column::new()
                .spacing(spacing::LG)
                .width(Length::FillPortion(1))
                .push(build_tips(ctx.i18n))
                .push(build_recent_reports(ctx.i18n)),
        );

    layout::page(
        Column::new()
            .spacing(spacing::XL)
            .push(layout::page_heading(
                ctx.i18n.tr("report-title"),
                ctx.i18n.tr("report-lead"),
            ))
            .push(body),
    )
}

fn build_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let draft = ctx.state.draft();

    let options: Vec<IssueTypeOption> = IssueType::ALL
        .into_iter()
        .map(|issue_type| IssueTypeOption {
            issue_type,
            label: i18n.tr(issue_type.label_key()),
        })
        .collect();
    let selected = options
        .iter()
        .find(|opt| Some(opt.issue_type) == draft.issue_type)
        .cloned();
    let type_picker = pick_list(options, selected, |opt| {
        Message::IssueTypeSelected(opt.issue_type)
    })
    .placeholder(i18n.tr("report-type-placeholder"))
    .padding(spacing::XS)
    .width(Length::Fill);

    let location = Column::new()
        .spacing(spacing::XS)
        .push(
            text_input(&i18n.tr("report-location-placeholder"), &draft.location)
                .on_input(Message::LocationChanged)
                .padding(spacing::XS),
        )
        .push(
            button(Text::new(format!("📍 {}", i18n.tr("report-use-location"))).size(typography::BODY_SM))
                .on_press(Message::UseCurrentLocation)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::outline),
        );

    let description = text_input(&i18n.tr("report-description-placeholder"), &draft.description)
        .on_input(Message::DescriptionChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS);

    let contact = Row::new()
        .spacing(spacing::MD)
        .push(
            Container::new(layout::field(
                i18n.tr("report-name-label"),
                text_input(&i18n.tr("report-name-placeholder"), &draft.name)
                    .on_input(Message::NameChanged)
                    .padding(spacing::XS),
            ))
            .width(Length::Fill),
        )
        .push(
            Container::new(layout::field(
                i18n.tr("report-email-label"),
                text_input(&i18n.tr("report-email-placeholder"), &draft.email)
                    .on_input(Message::EmailChanged)
                    .padding(spacing::XS),
            ))
            .width(Length::Fill),
        );

    let submit = button(
        Container::new(Text::new(i18n.tr("report-submit")).font(SEMIBOLD))
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .on_press(Message::Submit)
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::button::primary);

    layout::card(
        Column::new()
            .spacing(spacing::MD)
            .push(layout::title(format!("📷 {}", i18n.tr("report-form-title"))))
            .push(layout::muted(i18n.tr("report-form-lead"), typography::BODY_SM))
            .push(layout::field(i18n.tr("report-type-label"), type_picker))
            .push(layout::field(i18n.tr("report-location-label"), location))
            .push(layout::field(i18n.tr("report-description-label"), description))
            .push(contact)
            .push(submit),
    )
    .into()
}

fn build_tips<'a>(i18n: &I18n) -> Element<'a, Message> {
    let tips = [
        ("📷", "report-tip-photos", "report-tip-photos-detail"),
        ("📍", "report-tip-location", "report-tip-location-detail"),
        ("⚠", "report-tip-emergency", "report-tip-emergency-detail"),
    ];

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(layout::title(i18n.tr("report-tips-title")));
    for (glyph, title_key, detail_key) in tips {
        column = column.push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new(glyph))
                .push(
                    Column::new()
                        .push(Text::new(i18n.tr(title_key)).size(typography::BODY_SM).font(SEMIBOLD))
                        .push(layout::muted(i18n.tr(detail_key), typography::CAPTION)),
                ),
        );
    }

    layout::card(column).into()
}

fn build_recent_reports<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(layout::title(i18n.tr("report-recent-title")));

    for report in &RECENT_REPORTS {
        let (color, glyph) = status_style(report.status);
        let heading = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(layout::colored(glyph.to_string(), typography::BODY_SM, color))
            .push(Text::new(report.title).size(typography::BODY_SM).font(SEMIBOLD))
            .push(Space::new().width(Length::Fill))
            .push(layout::badge(i18n.tr(report.status.label_key()), color));

        let entry = Row::new()
            .spacing(spacing::SM)
            .push(
                Container::new(Space::new())
                    .width(Length::Fixed(border::WIDTH_LG))
                    .height(Length::Fixed(sizing::ICON_LG + spacing::LG))
                    .style(styles::container::stripe(color)),
            )
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(heading)
                    .push(layout::muted(report.location.to_string(), typography::CAPTION))
                    .push(layout::muted(report.reported.to_string(), typography::CAPTION)),
            );
        column = column.push(entry);
    }

    layout::card(column).into()
}
