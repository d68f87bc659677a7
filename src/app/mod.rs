// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the header and the
//! section views.
//!
//! The `App` struct owns the active section (through [`SectionState`]), the
//! per-section view state, localization and the toast manager, and
//! translates messages into navigation, notifications or preference writes.

pub mod config;
pub mod dispatch;
mod message;
pub mod paths;
pub mod persistence;
pub mod section;
pub mod section_state;
pub mod session_store;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{community, map, report};
use config::{Config, SessionStoreKind};
use iced::{window, Element, Subscription, Task, Theme};
use section::SectionId;
use section_state::SectionState;
use session_store::{FileStore, MemoryStore, SessionStore};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    sections: SectionState,
    theme_mode: ThemeMode,
    /// Whether the compact navigation dropdown is open.
    menu_open: bool,
    /// Last known window width, drives the compact header.
    window_width: f32,
    report: report::State,
    community: community::State,
    map: map::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.sections.active())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Whether a window of `width` gets the collapsed header.
#[must_use]
pub fn is_compact(width: f32) -> bool {
    width < sizing::COMPACT_BREAKPOINT
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Opens the configured session store. A file store without a resolvable
/// directory degrades to memory, which only loses persistence.
fn open_session_store(kind: SessionStoreKind) -> Box<dyn SessionStore> {
    match kind {
        SessionStoreKind::File => match FileStore::open_default() {
            Some(store) => {
                tracing::debug!(path = %store.path().display(), "using file session store");
                Box::new(store)
            }
            None => {
                tracing::warn!("no session directory available, navigation will not persist");
                Box::new(MemoryStore::new())
            }
        },
        SessionStoreKind::Memory => Box::new(MemoryStore::new()),
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the config, the session store and
    /// the launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let store = open_session_store(config.session.store);

        let mut app = Self::with_store(i18n, &config, store);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        app.apply_startup_section(flags.section.as_deref());

        tracing::info!(active = %app.sections.active(), "CitySync started");
        (app, Task::none())
    }

    /// Builds the shell around an already opened session store.
    pub fn with_store(i18n: I18n, config: &Config, store: Box<dyn SessionStore>) -> Self {
        Self {
            i18n,
            sections: SectionState::init(store),
            theme_mode: config.general.theme_mode,
            menu_open: false,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            report: report::State::default(),
            community: community::State::default(),
            map: map::State::default(),
            notifications: notifications::Manager::new(),
        }
    }

    /// Applies the `--section` flag on top of the restored section. Unknown
    /// identifiers are logged and ignored.
    fn apply_startup_section(&mut self, raw: Option<&str>) {
        if let Some(raw) = raw {
            if !self.sections.set_active_raw(raw) {
                tracing::warn!(section = raw, "ignoring unknown --section value");
            }
        }
    }

    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.sections.active()
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-name");
        let section = self.i18n.tr(self.sections.active().label_key());
        format!("{section} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            sections: &mut self.sections,
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            window_width: &mut self.window_width,
            report: &mut self.report,
            community: &mut self.community,
            map: &mut self.map,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::Landing(landing_message) => {
                update::handle_landing_message(&mut ctx, landing_message)
            }
            Message::Report(report_message) => {
                update::handle_report_message(&mut ctx, report_message)
            }
            Message::Community(community_message) => {
                update::handle_community_message(&mut ctx, community_message)
            }
            Message::Map(map_message) => update::handle_map_message(&mut ctx, map_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Navigate(section) => {
                *ctx.menu_open = false;
                update::navigate(&mut ctx, section);
                Task::none()
            }
            Message::Reload => update::handle_reload(&mut ctx),
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::WindowResized(width) => update::handle_window_resized(&mut ctx, width),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            active: self.sections.active(),
            descriptor: self.sections.view(),
            menu_open: self.menu_open,
            compact: is_compact(self.window_width),
            is_dark_theme: self.theme_mode.is_dark(),
            report: &self.report,
            community: &self.community,
            map: &self.map,
            notifications: &self.notifications,
        })
    }
}
