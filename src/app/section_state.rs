// SPDX-License-Identifier: MPL-2.0
//! Owned holder of the active section.
//!
//! The shell owns one [`SectionState`]; nothing else mutates the active
//! section. Every change is written through to the session store before the
//! setter returns, so a reload always observes the latest value.

use super::dispatch::{self, ViewDescriptor};
use super::persistence::SectionPersistence;
use super::section::SectionId;
use super::session_store::SessionStore;

#[derive(Debug)]
pub struct SectionState {
    active: SectionId,
    persistence: SectionPersistence,
}

impl SectionState {
    /// Initializes from the store: the stored section if present and valid,
    /// [`SectionId::Home`] otherwise.
    ///
    /// The resolved value is written back so the store always holds a valid
    /// identifier after startup.
    pub fn init(store: Box<dyn SessionStore>) -> Self {
        let mut persistence = SectionPersistence::new(store);
        let active = persistence.load().unwrap_or_default();
        persistence.save(active);
        tracing::debug!(%active, "section state initialized");
        Self {
            active,
            persistence,
        }
    }

    /// Returns the active section.
    #[must_use]
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Returns the view for the active section.
    #[must_use]
    pub fn view(&self) -> ViewDescriptor {
        dispatch::select_view(self.active)
    }

    /// Makes `section` active and persists it.
    pub fn set_active(&mut self, section: SectionId) {
        if self.active != section {
            tracing::debug!(from = %self.active, to = %section, "navigating");
        }
        self.active = section;
        self.persistence.save(section);
    }

    /// String-keyed setter. Unknown identifiers are rejected without touching
    /// the in-memory or stored value.
    ///
    /// Returns whether the change was applied.
    pub fn set_active_raw(&mut self, raw: &str) -> bool {
        match raw.parse::<SectionId>() {
            Ok(section) => {
                self.set_active(section);
                true
            }
            Err(error) => {
                tracing::debug!(%error, "rejected section change");
                false
            }
        }
    }

    /// Re-reads the store, as a page reload would. A missing or invalid entry
    /// resolves to [`SectionId::Home`]; an unreadable store keeps the
    /// in-memory value.
    pub fn reload(&mut self) {
        let reloaded = match self.persistence.read() {
            Ok(stored) => stored.unwrap_or_default(),
            Err(error) => {
                tracing::warn!(%error, "reload kept in-memory section");
                self.active
            }
        };
        self.set_active(reloaded);
    }

    /// Read-only access to the session store, mostly for tests.
    #[must_use]
    pub fn store(&self) -> &dyn SessionStore {
        self.persistence.store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::persistence::ACTIVE_SECTION_KEY;
    use crate::app::session_store::{MemoryStore, UnavailableStore};

    fn stored(state: &SectionState) -> Option<String> {
        state.store().get(ACTIVE_SECTION_KEY).unwrap()
    }

    fn store_with(raw: &str) -> Box<MemoryStore> {
        let mut store = MemoryStore::new();
        store.set(ACTIVE_SECTION_KEY, raw).unwrap();
        Box::new(store)
    }

    #[test]
    fn empty_store_starts_at_home() {
        let state = SectionState::init(Box::new(MemoryStore::new()));
        assert_eq!(state.active(), SectionId::Home);
        assert_eq!(state.view(), ViewDescriptor::Landing);
    }

    #[test]
    fn invalid_stored_value_starts_at_home() {
        let state = SectionState::init(store_with("bogus"));
        assert_eq!(state.active(), SectionId::Home);
        assert_eq!(stored(&state), Some("home".to_string()));
    }

    #[test]
    fn valid_stored_value_is_restored() {
        let state = SectionState::init(store_with("community"));
        assert_eq!(state.active(), SectionId::Community);
        assert_eq!(state.view(), ViewDescriptor::CommunityHub);
    }

    #[test]
    fn set_active_writes_through() {
        let mut state = SectionState::init(Box::new(MemoryStore::new()));
        state.set_active(SectionId::Map);
        assert_eq!(state.active(), SectionId::Map);
        assert_eq!(stored(&state), Some("map".to_string()));
    }

    #[test]
    fn set_active_is_idempotent() {
        let mut once = SectionState::init(Box::new(MemoryStore::new()));
        once.set_active(SectionId::Report);

        let mut twice = SectionState::init(Box::new(MemoryStore::new()));
        twice.set_active(SectionId::Report);
        twice.set_active(SectionId::Report);

        assert_eq!(once.active(), twice.active());
        assert_eq!(stored(&once), stored(&twice));
    }

    #[test]
    fn raw_setter_rejects_unknown_identifiers() {
        let mut state = SectionState::init(Box::new(MemoryStore::new()));
        state.set_active(SectionId::Report);

        assert!(!state.set_active_raw("settings"));
        assert_eq!(state.active(), SectionId::Report);
        assert_eq!(stored(&state), Some("report".to_string()));

        assert!(state.set_active_raw("map"));
        assert_eq!(state.active(), SectionId::Map);
    }

    #[test]
    fn reload_restores_last_navigation() {
        let mut state = SectionState::init(Box::new(MemoryStore::new()));
        state.set_active(SectionId::Report);
        assert_eq!(stored(&state), Some("report".to_string()));

        state.reload();
        assert_eq!(state.active(), SectionId::Report);
        assert_eq!(state.view(), ViewDescriptor::IssueReporting);
    }

    #[test]
    fn round_trip_through_sections_ends_home() {
        let mut state = SectionState::init(Box::new(MemoryStore::new()));
        for section in [SectionId::Map, SectionId::Community, SectionId::Home] {
            state.set_active(section);
            assert_eq!(stored(&state), Some(section.as_str().to_string()));
        }

        assert_eq!(state.active(), SectionId::Home);
        assert_eq!(state.view(), ViewDescriptor::Landing);
        assert_eq!(stored(&state), Some("home".to_string()));
    }

    #[test]
    fn unavailable_store_keeps_in_memory_state() {
        let mut state = SectionState::init(Box::new(UnavailableStore));
        assert_eq!(state.active(), SectionId::Home);

        state.set_active(SectionId::Community);
        assert_eq!(state.active(), SectionId::Community);

        state.reload();
        assert_eq!(state.active(), SectionId::Community);
    }

    #[test]
    fn every_section_reachable_from_every_other() {
        let mut state = SectionState::init(Box::new(MemoryStore::new()));
        for from in SectionId::ALL {
            for to in SectionId::ALL {
                state.set_active(from);
                state.set_active(to);
                assert_eq!(state.active(), to);
            }
        }
    }
}
