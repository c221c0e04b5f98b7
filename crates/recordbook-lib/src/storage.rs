//! Persistence adapter for the record list.
//!
//! The whole list is stored as one JSON array under a single key of a
//! [`KeyValueStore`]. Writes overwrite unconditionally; reads never fail and
//! degrade to an empty list, reporting how they got there in [`LoadState`].

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{RecordError, Result};
use crate::model::Record;

/// Key the record list lives under.
pub const STORAGE_KEY: &str = "lr1_items";

/// A string-keyed slot store.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store, used by tests and embedders without a disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed store: key `k` lives in `<dir>/k.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Keys name a file directly inside `dir`.
    fn check_key(key: &str) -> Result<()> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(RecordError::Storage(format!("invalid key: {key:?}")));
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::check_key(key)?;
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Uses write-to-temp + rename so a crash never leaves a partial blob.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::check_key(key)?;
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");

        let written = write_file(&tmp_path, value).and_then(|()| fs::rename(&tmp_path, &path));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                tracing::debug!(path = %tmp_path.display(), error = %cleanup, "Temp file not removed");
            }
            return Err(e.into());
        }
        Ok(())
    }
}

fn write_file(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(value.as_bytes())?;
    file.flush()
}

/// How a load arrived at its record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing stored yet.
    Fresh,
    /// Stored list parsed.
    Loaded,
    /// Stored data was unreadable or malformed; replaced by an empty list.
    Recovered { reason: String },
}

/// Result of [`load`].
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub records: Vec<Record>,
    pub state: LoadState,
}

impl LoadOutcome {
    fn recovered(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(%reason, "Stored records unreadable; starting empty");
        Self {
            records: Vec::new(),
            state: LoadState::Recovered { reason },
        }
    }

    #[must_use]
    pub const fn is_recovered(&self) -> bool {
        matches!(self.state, LoadState::Recovered { .. })
    }
}

/// Write the full record list under [`STORAGE_KEY`].
///
/// # Errors
///
/// Returns `Json` if serialization fails or the backend's error on write failure.
pub fn save(kv: &mut impl KeyValueStore, records: &[Record]) -> Result<()> {
    let json = serde_json::to_string(records)?;
    kv.set(STORAGE_KEY, &json)?;
    tracing::debug!(count = records.len(), "Saved records");
    Ok(())
}

/// Ids must be positive, unique, and leave room for a successor.
fn check_ids(records: &[Record]) -> std::result::Result<(), String> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.id == 0 || record.id == u64::MAX {
            return Err(format!("id out of range: {}", record.id));
        }
        if !seen.insert(record.id) {
            return Err(format!("duplicate id: {}", record.id));
        }
    }
    Ok(())
}

/// Read the record list. Never fails: every kind of bad data yields an empty
/// list with [`LoadState::Recovered`].
pub fn load(kv: &impl KeyValueStore) -> LoadOutcome {
    let raw = match kv.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            return LoadOutcome {
                records: Vec::new(),
                state: LoadState::Fresh,
            };
        }
        Err(e) => return LoadOutcome::recovered(format!("read failed: {e}")),
    };

    let value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => return LoadOutcome::recovered(format!("parse failed: {e}")),
    };

    if !value.is_array() {
        return LoadOutcome::recovered("stored value is not a list");
    }

    match serde_json::from_value::<Vec<Record>>(value) {
        Ok(records) => {
            if let Err(reason) = check_ids(&records) {
                return LoadOutcome::recovered(reason);
            }
            tracing::debug!(count = records.len(), "Loaded records");
            LoadOutcome {
                records,
                state: LoadState::Loaded,
            }
        }
        Err(e) => LoadOutcome::recovered(format!("shape mismatch: {e}")),
    }
}
