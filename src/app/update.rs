// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Section views report [`Event`](crate::ui::header::Event)s upward; the
//! handlers here turn them into navigation, toasts or preference writes.

use super::section::SectionId;
use super::section_state::SectionState;
use super::{persistence, Message};
use crate::ui::community::{self, Event as CommunityEvent};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::landing::{self, Event as LandingEvent};
use crate::ui::map::{self, Event as MapEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::report::{self, Event as ReportEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub sections: &'a mut SectionState,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub window_width: &'a mut f32,
    pub report: &'a mut report::State,
    pub community: &'a mut community::State,
    pub map: &'a mut map::State,
    pub notifications: &'a mut notifications::Manager,
}

/// Switches the active section.
///
/// View-local state of the section being left is dropped, so coming back
/// shows a fresh form, the default tab and an unfiltered map.
pub fn navigate(ctx: &mut UpdateContext<'_>, target: SectionId) {
    let previous = ctx.sections.active();
    if previous != target {
        reset_section(ctx, previous);
    }
    ctx.sections.set_active(target);
}

fn reset_section(ctx: &mut UpdateContext<'_>, section: SectionId) {
    match section {
        SectionId::Home => {}
        SectionId::Report => *ctx.report = report::State::default(),
        SectionId::Community => *ctx.community = community::State::default(),
        SectionId::Map => *ctx.map = map::State::default(),
    }
}

/// Restarts the shell from the session store: every view-local state is
/// discarded and the active section is re-read.
pub fn handle_reload(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.menu_open = false;
    *ctx.report = report::State::default();
    *ctx.community = community::State::default();
    *ctx.map = map::State::default();
    ctx.sections.reload();
    tracing::debug!(active = %ctx.sections.active(), "reloaded");
    Task::none()
}

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message, ctx.menu_open) {
        HeaderEvent::None => {}
        HeaderEvent::Navigate(section) => navigate(ctx, section),
        HeaderEvent::ShowUpdates => {
            ctx.notifications
                .push(Notification::info("header-updates-title").with_detail("header-updates-detail"));
        }
        HeaderEvent::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            persistence::persist_theme_mode(*ctx.theme_mode);
        }
    }
    Task::none()
}

pub fn handle_landing_message(
    ctx: &mut UpdateContext<'_>,
    message: landing::Message,
) -> Task<Message> {
    match landing::update(message) {
        LandingEvent::Navigate(section) => navigate(ctx, section),
        LandingEvent::Notify(notification) => ctx.notifications.push(notification),
    }
    Task::none()
}

pub fn handle_report_message(
    ctx: &mut UpdateContext<'_>,
    message: report::Message,
) -> Task<Message> {
    if let ReportEvent::Notify(notification) = report::update(ctx.report, message) {
        ctx.notifications.push(notification);
    }
    Task::none()
}

pub fn handle_community_message(
    ctx: &mut UpdateContext<'_>,
    message: community::Message,
) -> Task<Message> {
    if let CommunityEvent::Notify(notification) = community::update(ctx.community, message) {
        ctx.notifications.push(notification);
    }
    Task::none()
}

pub fn handle_map_message(ctx: &mut UpdateContext<'_>, message: map::Message) -> Task<Message> {
    if let MapEvent::Notify(notification) = map::update(ctx.map, message) {
        ctx.notifications.push(notification);
    }
    Task::none()
}

/// Tracks the window width; widening past the breakpoint closes the menu.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, width: f32) -> Task<Message> {
    *ctx.window_width = width;
    if !super::is_compact(width) {
        *ctx.menu_open = false;
    }
    Task::none()
}
