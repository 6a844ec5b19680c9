//! Preference store: the two persisted user choices (language, theme).
//!
//! Backed by a single JSON object file, the moral equivalent of the
//! browser's local storage. Reads and writes are total: a missing or
//! unreadable file reads as "unset", and a failed write degrades to
//! session-only behavior (the value stays in the in-memory map).

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::warn;

/// The fixed persistence keys. There is no namespacing beyond these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    Language,
    Theme,
}

impl Preference {
    pub fn key(self) -> &'static str {
        match self {
            Preference::Language => "preferred-language",
            Preference::Theme => "preferred-theme",
        }
    }
}

#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl PreferenceStore {
    /// Open the store backed by `path`, loading any previously persisted
    /// values. Never fails: a missing or corrupt file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Preference file {} is not valid JSON ({}), starting empty", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!("Could not read preference file {} ({}), starting empty", path.display(), e);
                HashMap::new()
            }
        };

        Self { path, values }
    }

    /// Read a persisted preference. `None` means "unset", a valid state.
    pub fn get(&self, pref: Preference) -> Option<&str> {
        self.values.get(pref.key()).map(String::as_str)
    }

    /// Persist a preference. Last write wins. Persistence failures are
    /// swallowed after a warning; the value remains available for the
    /// rest of the session either way.
    pub fn set(&mut self, pref: Preference, value: &str) {
        self.values
            .insert(pref.key().to_string(), value.to_string());

        if let Err(e) = self.flush() {
            warn!("Failed to persist preference '{}': {:#}", pref.key(), e);
        }
    }

    /// Rewrite the backing file atomically: write to a temp file in the
    /// same directory, then rename over the target.
    fn flush(&self) -> anyhow::Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &self.values)?;
        tmp.flush()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> PreferenceStore {
        PreferenceStore::open(dir.path().join("preferences.json"))
    }

    // ==================== Key Tests ====================

    #[test]
    fn test_preference_keys_are_fixed() {
        assert_eq!(Preference::Language.key(), "preferred-language");
        assert_eq!(Preference::Theme.key(), "preferred-theme");
    }

    // ==================== Get/Set Tests ====================

    #[test]
    fn test_get_unset_returns_none() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);

        assert_eq!(store.get(Preference::Language), None);
        assert_eq!(store.get(Preference::Theme), None);
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&dir);

        store.set(Preference::Language, "en");
        store.set(Preference::Theme, "dark");

        assert_eq!(store.get(Preference::Language), Some("en"));
        assert_eq!(store.get(Preference::Theme), Some("dark"));
    }

    #[test]
    fn test_last_write_wins() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&dir);

        store.set(Preference::Language, "en");
        store.set(Preference::Language, "tr");

        assert_eq!(store.get(Preference::Language), Some("tr"));
    }

    // ==================== Persistence Tests ====================

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("preferences.json");

        {
            let mut store = PreferenceStore::open(&path);
            store.set(Preference::Language, "en");
            store.set(Preference::Theme, "dark");
        }

        let reopened = PreferenceStore::open(&path);
        assert_eq!(reopened.get(Preference::Language), Some("en"));
        assert_eq!(reopened.get(Preference::Theme), Some("dark"));
    }

    #[test]
    fn test_setting_one_preference_keeps_the_other() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("preferences.json");

        {
            let mut store = PreferenceStore::open(&path);
            store.set(Preference::Language, "tr");
        }
        {
            let mut store = PreferenceStore::open(&path);
            store.set(Preference::Theme, "light");
        }

        let reopened = PreferenceStore::open(&path);
        assert_eq!(reopened.get(Preference::Language), Some("tr"));
        assert_eq!(reopened.get(Preference::Theme), Some("light"));
    }

    #[test]
    fn test_backing_file_is_json_object() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("preferences.json");

        let mut store = PreferenceStore::open(&path);
        store.set(Preference::Language, "en");

        let raw = std::fs::read_to_string(&path).expect("read");
        let parsed: serde_json::Value = serde_json::from_str(&raw).expect("parse");
        assert_eq!(parsed["preferred-language"], "en");
    }

    // ==================== Degraded Mode Tests ====================

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").expect("write");

        let store = PreferenceStore::open(&path);
        assert_eq!(store.get(Preference::Language), None);
    }

    #[test]
    fn test_unwritable_path_degrades_to_session_only() {
        // Point at a directory that does not exist; flush fails but the
        // value must still be readable within the session.
        let mut store = PreferenceStore::open("/nonexistent-dir/deeper/preferences.json");

        store.set(Preference::Theme, "dark");
        assert_eq!(store.get(Preference::Theme), Some("dark"));
    }

    #[test]
    fn test_non_string_values_in_file_read_as_empty() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"preferred-language": 42}"#).expect("write");

        let store = PreferenceStore::open(&path);
        assert_eq!(store.get(Preference::Language), None);
    }
}
