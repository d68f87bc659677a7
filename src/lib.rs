// SPDX-License-Identifier: MPL-2.0
//! `citysync` is a civic companion desktop app built with the Iced GUI
//! framework.
//!
//! It routes between four sections (home, issue reporting, community hub and
//! city map), keeps the active section in a session-scoped store so a reload
//! returns to it, and localizes every label with Fluent.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;

pub use app::config;
