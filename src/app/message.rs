// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::section::SectionId;
use crate::ui::community;
use crate::ui::header;
use crate::ui::landing;
use crate::ui::map;
use crate::ui::notifications;
use crate::ui::report;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Landing(landing::Message),
    Report(report::Message),
    Community(community::Message),
    Map(map::Message),
    Notification(notifications::NotificationMessage),
    /// Keyboard shortcut or programmatic section change.
    Navigate(SectionId),
    /// Re-read the active section from the session store.
    Reload,
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// New window width in logical pixels.
    WindowResized(f32),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CITYSYNC_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional session directory override (for the session store).
    /// Takes precedence over `CITYSYNC_SESSION_DIR`.
    pub session_dir: Option<String>,
    /// Section to open once startup restored the stored one.
    pub section: Option<String>,
}
