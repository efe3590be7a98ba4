//! JSON-file-backed key-value store.
//!
//! Stands in for the browser session storage of the original site: one
//! file holding a flat string-to-string map, rewritten on every `set`.
//! Single writer, last write wins.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use pledges_core::{KvStore, StoreError};

pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store file, creating an empty store when it does not
    /// exist yet. An unreadable or malformed file is an error here: the
    /// substrate itself is broken, which is different from one corrupt
    /// value inside it (the core clears those itself).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("store file {} is not a JSON object", path.display()))?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("could not read store file {}", path.display()))
            }
        };
        Ok(Self { path, entries })
    }

    fn save(&self) -> std::io::Result<()> {
        let raw = serde_json::to_string_pretty(&self.entries)
            .expect("string map always serializes");
        fs::write(&self.path, raw)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save().map_err(|err| StoreError::Write {
            key: key.to_string(),
            message: err.to_string(),
        })
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        // `remove` is infallible by contract; a failed rewrite only means
        // the removal reappears next session.
        if let Err(err) = self.save() {
            warn!(%err, key, "could not persist key removal");
        }
    }
}
