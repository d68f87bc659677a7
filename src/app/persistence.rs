// SPDX-License-Identifier: MPL-2.0
//! Persistence logic.
//!
//! Two kinds of state are written from the shell:
//! - the active section, kept in the session store under a fixed key;
//! - user preferences (theme mode), kept in `settings.toml`.
//!
//! Neither path surfaces failures to the user. A store that cannot be read
//! or written leaves the in-memory state authoritative for the session.

use super::config;
use super::section::SectionId;
use super::session_store::SessionStore;
use crate::error::Result;
use crate::ui::theming::ThemeMode;

/// Key under which the active section is stored.
pub const ACTIVE_SECTION_KEY: &str = "activeSection";

/// Reads and writes the active section through a [`SessionStore`].
#[derive(Debug)]
pub struct SectionPersistence {
    store: Box<dyn SessionStore>,
}

impl SectionPersistence {
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the stored section, or `None` when the entry is missing,
    /// unreadable or not one of the known identifiers.
    #[must_use]
    pub fn load(&self) -> Option<SectionId> {
        self.read().unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to read session store");
            None
        })
    }

    /// Like [`load`](Self::load) but keeps store failures apart from a
    /// missing or invalid entry.
    pub fn read(&self) -> Result<Option<SectionId>> {
        let Some(raw) = self.store.get(ACTIVE_SECTION_KEY)? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(section) => Ok(Some(section)),
            Err(error) => {
                tracing::debug!(%error, "ignoring stored section");
                Ok(None)
            }
        }
    }

    /// Writes `section` under [`ACTIVE_SECTION_KEY`]. Failures are logged and
    /// otherwise ignored.
    pub fn save(&mut self, section: SectionId) {
        match self.store.set(ACTIVE_SECTION_KEY, section.as_str()) {
            Ok(()) => tracing::debug!(%section, "persisted active section"),
            Err(error) => tracing::warn!(%error, %section, "failed to persist active section"),
        }
    }

    /// Read-only access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }
}

/// Persists the theme mode to `settings.toml`.
///
/// Guarded during tests to keep the developer's real config untouched; the
/// config round trip itself is covered in `config` tests.
pub fn persist_theme_mode(theme_mode: ThemeMode) {
    if cfg!(test) {
        return;
    }

    let (mut cfg, _) = config::load();
    cfg.general.theme_mode = theme_mode;

    if let Err(error) = config::save(&cfg) {
        tracing::warn!(%error, "failed to save config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session_store::{FileStore, MemoryStore, UnavailableStore};
    use tempfile::tempdir;

    fn memory_with(raw: Option<&str>) -> SectionPersistence {
        let mut store = MemoryStore::new();
        if let Some(raw) = raw {
            store.set(ACTIVE_SECTION_KEY, raw).unwrap();
        }
        SectionPersistence::new(Box::new(store))
    }

    #[test]
    fn save_then_load_returns_each_section() {
        let mut persistence = memory_with(None);
        for section in SectionId::ALL {
            persistence.save(section);
            assert_eq!(persistence.load(), Some(section));
        }
    }

    #[test]
    fn save_writes_the_literal_identifier() {
        let mut persistence = memory_with(None);
        persistence.save(SectionId::Community);
        assert_eq!(
            persistence.store().get(ACTIVE_SECTION_KEY).unwrap(),
            Some("community".to_string())
        );
    }

    #[test]
    fn load_without_entry_is_absent() {
        assert_eq!(memory_with(None).load(), None);
    }

    #[test]
    fn load_with_foreign_value_is_absent() {
        assert_eq!(memory_with(Some("bogus")).load(), None);
        assert_eq!(memory_with(Some("")).load(), None);
    }

    #[test]
    fn unavailable_store_is_silent() {
        let mut persistence = SectionPersistence::new(Box::new(UnavailableStore));
        persistence.save(SectionId::Map);
        assert_eq!(persistence.load(), None);
    }

    #[test]
    fn corrupt_session_file_loads_as_absent() {
        let temp_dir = tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join(crate::app::session_store::SESSION_FILE),
            "not valid cbor data",
        )
        .unwrap();

        let persistence = SectionPersistence::new(Box::new(FileStore::in_dir(temp_dir.path())));
        assert_eq!(persistence.load(), None);
    }

    #[test]
    fn file_round_trip_for_each_section() {
        let temp_dir = tempdir().expect("create temp dir");
        for section in SectionId::ALL {
            let mut writer =
                SectionPersistence::new(Box::new(FileStore::in_dir(temp_dir.path())));
            writer.save(section);

            let reader = SectionPersistence::new(Box::new(FileStore::in_dir(temp_dir.path())));
            assert_eq!(reader.load(), Some(section));
        }
    }
}
