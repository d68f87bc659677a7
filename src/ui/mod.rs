// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every section view follows the same Elm-style shape: a `ViewContext`
//! carries what the view reads, `update` consumes a `Message` and returns an
//! `Event` for the shell to act on.
//!
//! # Sections
//!
//! - [`landing`] - Hero banner, features and call to action
//! - [`report`] - Issue report form with tips and recent reports
//! - [`community`] - Forums, events and surveys
//! - [`map`] - Place filters, nearby places and nearby issues
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Brand, section navigation and compact dropdown
//! - [`layout`] - Page frame, cards, grids and badges
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod community;
pub mod design_tokens;
pub mod header;
pub mod landing;
pub mod layout;
pub mod map;
pub mod notifications;
pub mod report;
pub mod styles;
pub mod theming;
