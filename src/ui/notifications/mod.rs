// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the bottom-right corner to confirm
//! actions (report submitted, event joined) or flag problems (missing form
//! fields, unreadable settings) without blocking interaction.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("report-success-title").with_detail("report-success-detail"));
//!
//! // In the view, layered over the page
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! - Duration: 3s for success/info, 5s for warnings, errors stay until dismissed
//! - At most 3 visible; the rest wait in a FIFO queue

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
