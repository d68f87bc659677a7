// SPDX-License-Identifier: MPL-2.0
//! Session-scoped key-value storage.
//!
//! The store outlives a single run of the shell (a reload re-reads it) but
//! not the login session. Two backends exist:
//!
//! - [`MemoryStore`]: process-local, used in tests and as the degraded mode
//!   when no session directory is available.
//! - [`FileStore`]: a CBOR map of string keys to string values, kept in the
//!   session directory (see [`paths::get_session_dir`]).

use super::paths;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Store file name within the session directory.
pub const SESSION_FILE: &str = "session.cbor";

/// Key-value store boundary used by the persistence adapter.
pub trait SessionStore: std::fmt::Debug {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` from the store. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store. Lives as long as the value does.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// CBOR-file backed store.
///
/// Every operation goes to disk so two shells in the same session observe
/// each other's writes on their next read.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the store file inside `dir`. The file is created lazily on the
    /// first write.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(SESSION_FILE),
        }
    }

    /// Opens the store in the resolved session directory.
    ///
    /// Returns `None` when no session directory can be determined.
    #[must_use]
    pub fn open_default() -> Option<Self> {
        Self::open_with_override(None)
    }

    /// Opens the store with an optional session directory override.
    #[must_use]
    pub fn open_with_override(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_session_dir_with_override(base_dir).map(|dir| Self::in_dir(&dir))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let file = fs::File::open(&self.path)?;
        let entries = ciborium::from_reader(BufReader::new(file))?;
        Ok(entries)
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(entries, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

/// Store that rejects every operation. Stands in for a session store that
/// became unavailable, e.g. a read-only or vanished runtime directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::Store("session store unavailable".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Store("session store unavailable".into()))
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Err(Error::Store("session store unavailable".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemoryStore::new();
        store.set("k", "a").unwrap();
        store.set("k", "b").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("b".to_string()));
    }

    #[test]
    fn memory_store_remove_is_idempotent() {
        let mut store = MemoryStore::new();
        store.set("k", "a").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn file_store_missing_file_reads_as_empty() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = FileStore::in_dir(temp_dir.path());
        assert_eq!(store.get("activeSection").unwrap(), None);
        assert!(!store.path().exists(), "reads must not create the file");
    }

    #[test]
    fn file_store_persists_across_instances() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut first = FileStore::in_dir(temp_dir.path());
        first.set("activeSection", "map").unwrap();

        let second = FileStore::in_dir(temp_dir.path());
        assert_eq!(second.get("activeSection").unwrap(), Some("map".to_string()));
    }

    #[test]
    fn file_store_keeps_unrelated_keys() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store = FileStore::in_dir(temp_dir.path());
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");
        let mut store = FileStore::in_dir(&nested);
        store.set("k", "v").unwrap();
        assert!(nested.join(SESSION_FILE).exists());
    }

    #[test]
    fn file_store_corrupt_file_is_an_error_on_read() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(SESSION_FILE), "not valid cbor data").unwrap();

        let store = FileStore::in_dir(temp_dir.path());
        assert!(matches!(store.get("k"), Err(Error::Store(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn file_store_reports_failed_writes() {
        let full = Path::new("/dev/full");
        if !full.exists() {
            return;
        }
        let mut store = FileStore {
            path: full.to_path_buf(),
        };
        assert!(matches!(store.set("k", "v"), Err(Error::Io(_))));
    }

    #[test]
    fn file_store_write_replaces_corrupt_file() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(SESSION_FILE), "not valid cbor data").unwrap();

        let mut store = FileStore::in_dir(temp_dir.path());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn open_with_override_uses_given_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = FileStore::open_with_override(Some(temp_dir.path().to_path_buf()))
            .expect("override always resolves");
        assert_eq!(store.path(), temp_dir.path().join(SESSION_FILE));
    }

    #[test]
    fn unavailable_store_fails_every_operation() {
        let mut store = UnavailableStore;
        assert!(store.get("k").is_err());
        assert!(store.set("k", "v").is_err());
        assert!(store.remove("k").is_err());
    }
}
