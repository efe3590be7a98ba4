//! Key-value store boundary.
//!
//! The showcase persists its state as three independent string-keyed JSON
//! blobs, mirroring the browser session storage it replaces:
//!
//! | Key                    | Type                 | Description                      |
//! |------------------------|----------------------|----------------------------------|
//! | `auth-state`           | `AuthState`          | Persisted admin session flag     |
//! | `project-transactions` | `Vec<Transaction>`   | Append-only transaction log      |
//! | `curitiba-projects`    | `Vec<Project>`       | Catalog snapshot (cached folds)  |
//!
//! Every save is a whole-blob overwrite; there is one logical writer per
//! store, so last-write-wins is acceptable and no locking exists.
//!
//! [`read_json`] gives the typed boundary: a malformed blob comes back as a
//! named [`StoreError::Decode`] instead of a panic or a stray
//! `serde_json::Error`, and each restore site decides recovery (clear the
//! key, fall back to defaults).

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StoreError;

/// Key for the persisted [`crate::AuthState`].
pub const AUTH_STATE_KEY: &str = "auth-state";
/// Key for the serialized transaction log.
pub const TRANSACTIONS_KEY: &str = "project-transactions";
/// Key for the catalog snapshot.
pub const CATALOG_KEY: &str = "curitiba-projects";

/// Synchronous, session-scoped string store.
///
/// `set` can fail (quota exceeded, backing file unavailable); `get` and
/// `remove` cannot. Implementations must not interpret the values.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str);
}

/// Read and decode a JSON blob.
///
/// Returns `Ok(None)` when the key is absent and [`StoreError::Decode`]
/// when the stored text is not valid JSON for `T`.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KvStore + ?Sized,
{
    match store.get(key) {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.to_string(),
                source,
            }),
    }
}

/// Encode `value` as JSON and overwrite `key` with it.
pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
    S: KvStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

/// In-memory store scoped to the owning session, the default substrate for
/// tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
