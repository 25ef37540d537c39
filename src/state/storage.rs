//! Persisted key/value storage backing the session.
//!
//! Only two keys are ever written: [`TOKEN_KEY`] holds the raw bearer string
//! and [`USER_INFO_KEY`] holds the JSON-serialized profile.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::net::error::ClientError;

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

pub const TOKEN_KEY: &str = "token";
pub const USER_INFO_KEY: &str = "userInfo";

/// String key/value persistence, modeled on the browser `Storage` API.
pub trait SessionStorage {
    /// Read a key. A missing key is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Storage` when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;

    /// Write a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Storage` when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError>;

    /// Delete a key. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Storage` when the backend rejects the write.
    fn remove(&mut self, key: &str) -> Result<(), ClientError>;

    /// Delete several keys. Backends that can do this in one write override
    /// it so a failure leaves every key untouched.
    ///
    /// # Errors
    ///
    /// Returns the first backend failure.
    fn remove_all(&mut self, keys: &[&str]) -> Result<(), ClientError> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), ClientError> {
        (**self).remove(key)
    }

    fn remove_all(&mut self, keys: &[&str]) -> Result<(), ClientError> {
        (**self).remove_all(keys)
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// Process-local storage; nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with existing entries, e.g. to simulate a reload.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self { entries: entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect() }
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ClientError> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// FILE
// =============================================================================

/// A JSON object on disk (`{ "token": "...", "userInfo": "..." }`).
///
/// Every mutation rewrites the whole file through a uniquely named sibling
/// temp file that is then renamed over it, and only updates the in-memory
/// copy once the rename succeeded.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open storage at `path`. A missing file starts empty; an unreadable or
    /// malformed file is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "session file malformed; starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "session file unreadable; starting empty");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit(&mut self, next: BTreeMap<String, String>) -> Result<(), ClientError> {
        let raw = serde_json::to_string_pretty(&next).map_err(|e| ClientError::Storage(e.to_string()))?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| ClientError::Storage(format!("{}: {e}", dir.display())))?;
        tmp.write_all(raw.as_bytes())
            .map_err(|e| ClientError::Storage(format!("{}: {e}", tmp.path().display())))?;
        tmp.persist(&self.path)
            .map_err(|e| ClientError::Storage(format!("{}: {}", self.path.display(), e.error)))?;
        self.entries = next;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut next = self.entries.clone();
        next.insert(key.to_owned(), value.to_owned());
        self.commit(next)
    }

    fn remove(&mut self, key: &str) -> Result<(), ClientError> {
        self.remove_all(&[key])
    }

    fn remove_all(&mut self, keys: &[&str]) -> Result<(), ClientError> {
        let mut next = self.entries.clone();
        for key in keys {
            next.remove(*key);
        }
        self.commit(next)
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.localStorage`. Requires a browser environment.
#[cfg(feature = "hydrate")]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    /// Borrow the window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Storage` outside a browser or when storage is
    /// disabled.
    pub fn open() -> Result<Self, ClientError> {
        let window = web_sys::window().ok_or_else(|| ClientError::Storage("no window".into()))?;
        match window.local_storage() {
            Ok(Some(inner)) => Ok(Self { inner }),
            Ok(None) => Err(ClientError::Storage("localStorage unavailable".into())),
            Err(e) => Err(ClientError::Storage(format!("{e:?}"))),
        }
    }
}

#[cfg(feature = "hydrate")]
impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        self.inner.get_item(key).map_err(|e| ClientError::Storage(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        self.inner.set_item(key, value).map_err(|e| ClientError::Storage(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), ClientError> {
        self.inner.remove_item(key).map_err(|e| ClientError::Storage(format!("{e:?}")))
    }
}
