// SPDX-License-Identifier: MPL-2.0
//! Notification data: severity, translated title and optional detail line.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Text glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }

    /// Returns `None` for errors, which need a manual dismiss.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A toast waiting to be shown or on screen.
///
/// Keys are resolved through i18n at render time, so a locale change also
/// applies to toasts already visible.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title_key: String,
    detail_key: Option<String>,
    args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, title_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            title_key: title_key.into(),
            detail_key: None,
            args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, title_key)
    }

    pub fn info(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, title_key)
    }

    pub fn warning(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title_key)
    }

    pub fn error(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, title_key)
    }

    /// Adds a second, smaller line under the title.
    #[must_use]
    pub fn with_detail(mut self, detail_key: impl Into<String>) -> Self {
        self.detail_key = Some(detail_key.into());
        self
    }

    /// Adds a placeable shared by the title and the detail line.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub fn detail_key(&self) -> Option<&str> {
        self.detail_key.as_deref()
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    /// Whether the auto-dismiss delay has elapsed at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|delay| now.saturating_duration_since(self.created_at) >= delay)
    }
}
