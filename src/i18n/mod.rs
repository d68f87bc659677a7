// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded at build time from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Placeable arguments and plural selection via `$count`
//! - Missing keys render as `MISSING: <key>` so gaps are visible in the UI

pub mod fluent;

pub use fluent::I18n;
