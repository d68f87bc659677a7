// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header sits above the view the dispatcher selected for the active
//! section; toasts float over both.

use super::dispatch::ViewDescriptor;
use super::section::SectionId;
use super::Message;
use crate::i18n::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::{community, header, landing, map, report};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: SectionId,
    pub descriptor: ViewDescriptor,
    pub menu_open: bool,
    pub compact: bool,
    pub is_dark_theme: bool,
    pub report: &'a report::State,
    pub community: &'a community::State,
    pub map: &'a map::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the shell around the active section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let header_view = header::view(header::ViewContext {
        i18n,
        active: ctx.active,
        menu_open: ctx.menu_open,
        compact: ctx.compact,
        is_dark: ctx.is_dark_theme,
    })
    .map(Message::Header);

    let section_view: Element<'_, Message> = match ctx.descriptor {
        ViewDescriptor::Landing => landing::view(landing::ViewContext { i18n }).map(Message::Landing),
        ViewDescriptor::IssueReporting => report::view(report::ViewContext {
            i18n,
            state: ctx.report,
        })
        .map(Message::Report),
        ViewDescriptor::CommunityHub => community::view(community::ViewContext {
            i18n,
            state: ctx.community,
        })
        .map(Message::Community),
        ViewDescriptor::InteractiveMap => map::view(map::ViewContext {
            i18n,
            state: ctx.map,
        })
        .map(Message::Map),
    };

    let base = Column::new()
        .push(header_view)
        .push(
            Container::new(section_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
