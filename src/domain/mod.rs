// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Civic content and its rules, with no external dependencies.
//!
//! This module contains the sample content displayed by the sections and the
//! pure functions that filter and validate it. Nothing here knows about the
//! UI toolkit or the session store.
//!
//! # Modules
//!
//! - [`issues`]: Issue types, report drafts ([`IssueDraft`](issues::IssueDraft)),
//!   recent reports
//! - [`community`]: Forum posts, events, surveys, [`filter_posts`](community::filter_posts)
//! - [`places`]: Map locations, [`filter_places`](places::filter_places), nearby issues

pub mod community;
pub mod issues;
pub mod places;
