//! Persistence bridge for the shortcut rails.
//!
//! Each rail is stored as a full list under its own key (`leftShortcuts`,
//! `rightShortcuts`). Writes replace the previous value for that key; there
//! is no merging.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::shortcuts::{ShortcutEntry, Side};

const FILENAME: &str = "shortcuts.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed shortcut storage: {0}")]
    Json(#[from] serde_json::Error),
}

/// Both rails as they were last persisted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredRails {
    pub left_shortcuts: Vec<ShortcutEntry>,
    pub right_shortcuts: Vec<ShortcutEntry>,
}

impl StoredRails {
    pub fn rail(&self, side: Side) -> &[ShortcutEntry] {
        match side {
            Side::Left => &self.left_shortcuts,
            Side::Right => &self.right_shortcuts,
        }
    }

    fn set_rail(&mut self, side: Side, entries: &[ShortcutEntry]) {
        let slot = match side {
            Side::Left => &mut self.left_shortcuts,
            Side::Right => &mut self.right_shortcuts,
        };
        *slot = entries.to_vec();
    }
}

/// Key-value storage for the rails
///
/// `load` runs once when the page mounts; `save_rail` runs after every
/// change to a rail with that rail's complete list.
pub trait ShortcutStore: Send + Sync {
    fn load(&self) -> Result<StoredRails, StoreError>;
    fn save_rail(&self, side: Side, entries: &[ShortcutEntry]) -> Result<(), StoreError>;
}

/// Rails stored in a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store `shortcuts.json` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(FILENAME))
    }

    /// Get the default storage path (shortcuts.json in local data directory)
    pub fn default_path() -> PathBuf {
        if let Some(mut path) = dirs::data_local_dir() {
            path.push("gitpaper");
            path.push(FILENAME);
            return path;
        }

        // Fallback to home directory
        if let Some(mut path) = dirs::home_dir() {
            path.push(".gitpaper");
            path.push(FILENAME);
            return path;
        }

        PathBuf::from(FILENAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Write `content` to a temporary file next to the store and rename it
    /// over the store, so a reader never sees a partially written document
    fn write_replacing(&self, content: &[u8]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        file.write_all(content).map_err(|e| self.io_error(e))?;
        file.as_file().sync_all().map_err(|e| self.io_error(e))?;
        file.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }

    /// Read the whole document, keeping keys this store does not own
    fn read_document(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl ShortcutStore for JsonFileStore {
    fn load(&self) -> Result<StoredRails, StoreError> {
        let document = self.read_document()?;
        let rails = serde_json::from_value(Value::Object(document))?;
        Ok(rails)
    }

    fn save_rail(&self, side: Side, entries: &[ShortcutEntry]) -> Result<(), StoreError> {
        tracing::debug!(path = %self.path.display(), %side, count = entries.len(), "Saving shortcuts");

        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(StoreError::Json(e)) => {
                tracing::warn!(%e, "Replacing malformed shortcut storage");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        document.insert(side.storage_key().to_string(), serde_json::to_value(entries)?);

        let content = serde_json::to_string_pretty(&document)?;
        self.write_replacing(content.as_bytes())
    }
}

/// Rails kept in memory only (tests and `--ephemeral` runs)
#[derive(Debug, Default)]
pub struct MemoryStore {
    rails: Mutex<StoredRails>,
}

impl MemoryStore {
    pub fn snapshot(&self) -> StoredRails {
        self.rails.lock().clone()
    }
}

impl ShortcutStore for MemoryStore {
    fn load(&self) -> Result<StoredRails, StoreError> {
        Ok(self.snapshot())
    }

    fn save_rail(&self, side: Side, entries: &[ShortcutEntry]) -> Result<(), StoreError> {
        self.rails.lock().set_rail(side, entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::tests::draft;
    use tempfile::TempDir;

    fn entry(label: &str, side: Side) -> ShortcutEntry {
        ShortcutEntry::from_draft(draft(label), side)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp_dir.path());
        assert_eq!(store.load().unwrap(), StoredRails::default());
    }

    #[test]
    fn test_save_and_load_rails() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp_dir.path().join("nested"));

        let left = vec![entry("A", Side::Left), entry("B", Side::Left)];
        let right = vec![entry("C", Side::Right)];
        store.save_rail(Side::Left, &left).unwrap();
        store.save_rail(Side::Right, &right).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.rail(Side::Left), left.as_slice());
        assert_eq!(loaded.rail(Side::Right), right.as_slice());
    }

    #[test]
    fn test_save_replaces_only_that_rail() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp_dir.path());

        store
            .save_rail(Side::Left, &[entry("A", Side::Left), entry("B", Side::Left)])
            .unwrap();
        store.save_rail(Side::Right, &[entry("C", Side::Right)]).unwrap();
        let replacement = vec![entry("D", Side::Left)];
        store.save_rail(Side::Left, &replacement).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.rail(Side::Left), replacement.as_slice());
        assert_eq!(loaded.rail(Side::Right).len(), 1);
    }

    #[test]
    fn test_unrelated_keys_survive() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp_dir.path());
        fs::write(
            store.path(),
            r#"{"newtabWallpaper":{"theme":"Earth Tone"},"leftShortcuts":[{"id":"1","label":"Example","url":"https://example.com","icon":"🔗"}]}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.left_shortcuts.len(), 1);
        assert_eq!(loaded.left_shortcuts[0].label, "Example");

        store.save_rail(Side::Right, &[]).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("newtabWallpaper"));
        assert!(content.contains("rightShortcuts"));
    }

    #[test]
    fn test_malformed_file_fails_to_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp_dir.path());
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Json(_))));

        // Saving recovers by starting a fresh document
        store.save_rail(Side::Left, &[entry("A", Side::Left)]).unwrap();
        assert_eq!(store.load().unwrap().left_shortcuts.len(), 1);
    }

    #[test]
    fn test_save_leaves_no_temporary_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp_dir.path());
        fs::write(store.path(), r#"{"rightShortcuts":[]}"#).unwrap();

        for label in ["A", "B", "C"] {
            store.save_rail(Side::Left, &[entry(label, Side::Left)]).unwrap();
        }

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![FILENAME.to_string()]);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.left_shortcuts[0].label, "C");
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        store.save_rail(Side::Right, &[entry("A", Side::Right)]).unwrap();
        let snapshot = store.snapshot();
        assert!(snapshot.left_shortcuts.is_empty());
        assert_eq!(snapshot.right_shortcuts[0].label, "A");
    }
}
