//! Persisted key-value storage for the high score
//!
//! Values are written as base-10 text; plain JSON numbers are read too.
//! Anything missing or unparseable reads back as zero, so a corrupt store
//! never stops a game from starting.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write score file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode score file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Integer key-value storage that outlives a single game session
pub trait ScoreStore {
    /// Read a value, or 0 if it is absent or not a number
    fn get(&self, key: &str) -> u32;

    /// Write a value
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError>;
}

/// Key to raw value, as the JSON file holds it
///
/// Values stay untyped so one odd entry never invalidates the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct Entries(BTreeMap<String, Value>);

impl Entries {
    fn get(&self, key: &str) -> u32 {
        self.0.get(key).and_then(parse_value).unwrap_or(0)
    }

    fn set(&mut self, key: &str, value: u32) {
        self.0
            .insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn parse_value(value: &Value) -> Option<u32> {
    match value {
        Value::String(raw) => raw.trim().parse().ok(),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    }
}

/// In-memory store for tests and `--no-save` sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Entries,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw text value, numeric or not
    #[must_use]
    pub fn with_raw(mut self, key: &str, raw: &str) -> Self {
        self.entries
            .0
            .insert(key.to_string(), Value::String(raw.to_string()));
        self
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> u32 {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        self.entries.set(key, value);
        Ok(())
    }
}

/// JSON file store
///
/// The file is read once on open; every `set` rewrites the whole file through
/// a temporary file and a rename.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: Entries,
}

impl FileStore {
    /// Open a store at `path`
    ///
    /// A missing or unreadable file starts an empty store; it is only created
    /// on the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring malformed score file");
                Entries::default()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Entries::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read score file");
                Entries::default()
            }
        };
        debug!(path = %path.display(), keys = entries.0.len(), "opened score file");

        Self { path, entries }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> u32 {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        self.entries.set(key, value);
        let json = serde_json::to_string_pretty(&self.entries)?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), key, value, "saved score");
        Ok(())
    }
}

fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), 0);
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        store.set("hangmanHighScore", 80).unwrap();
        assert_eq!(store.get("hangmanHighScore"), 80);
    }

    #[test]
    fn unparseable_values_read_as_zero() {
        let store = MemoryStore::new()
            .with_raw("words", "lots")
            .with_raw("negative", "-5")
            .with_raw("empty", "")
            .with_raw("padded", " 42 ");
        assert_eq!(store.get("words"), 0);
        assert_eq!(store.get("negative"), 0);
        assert_eq!(store.get("empty"), 0);
        assert_eq!(store.get("padded"), 42);
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let store = FileStore::open(&path);
        assert_eq!(store.get("hangmanHighScore"), 0);
        assert!(!path.exists());
    }

    #[test]
    fn file_store_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = FileStore::open(&path);
        store.set("hangmanHighScore", 50).unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("hangmanHighScore"), 50);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"50\""), "value should be stored as text: {raw}");
    }

    #[test]
    fn file_store_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scores.json");

        let mut store = FileStore::open(&path);
        store.set("hangmanHighScore", 20).unwrap();
        assert_eq!(FileStore::open(&path).get("hangmanHighScore"), 20);
    }

    #[test]
    fn file_store_malformed_file_reads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("hangmanHighScore"), 0);

        // Writing replaces the broken file
        store.set("hangmanHighScore", 10).unwrap();
        assert_eq!(FileStore::open(&path).get("hangmanHighScore"), 10);
    }

    #[test]
    fn file_store_accepts_numeric_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(
            &path,
            r#"{"hangmanHighScore": 50, "theme": "dark", "streak": [1, 2]}"#,
        )
        .unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("hangmanHighScore"), 50);
        assert_eq!(store.get("streak"), 0);

        // Other keys survive a write
        store.set("hangmanHighScore", 60).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"dark\""), "other keys kept: {raw}");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("hangmanHighScore"), 60);
    }

    #[test]
    fn numbers_outside_u32_read_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{"big": 5000000000, "neg": -3, "frac": 1.5}"#).unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("big"), 0);
        assert_eq!(store.get("neg"), 0);
        assert_eq!(store.get("frac"), 0);
    }
}
