//! Key-value persistence for posts and the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's `localStorage` is the only durable store. Everything goes
//! through [`KeyValueStore`] so the feed store and theme controller can be
//! exercised natively against [`MemoryStorage`].
//!
//! ERROR HANDLING
//! ==============
//! Loads never fail outward: a missing key or undecodable value is treated as
//! "start empty" and logged. Saves return [`StorageError`] and callers decide
//! whether to log and continue.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::config;
use crate::state::post::Post;
use crate::state::theme::Theme;

/// Error returned by [`KeyValueStore`] operations and the save helpers.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled, or not a browser build).
    #[error("local storage is not available")]
    Unavailable,
    /// A value could not be serialized before writing.
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
    /// A stored value exists but is not valid for its key.
    #[error("failed to decode stored value: {0}")]
    Decode(#[source] serde_json::Error),
    /// The backend rejected a read.
    #[error("storage read failed: {0}")]
    Read(String),
    /// The backend rejected a write (quota exceeded, private mode, ...).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String-keyed, string-valued storage.
pub trait KeyValueStore {
    /// Read the raw value for `key`, `Ok(None)` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Overwrite the raw value for `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Handle to the window's `localStorage`.
///
/// Stateless: the storage object is looked up on every call so the handle
/// stays `Send + Sync` and can live inside reactive signals.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        _ => Err(StorageError::Unavailable),
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Read(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("no browser storage for {key}");
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Write(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("no browser storage for {key} ({} bytes dropped)", value.len());
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store for tests and non-browser builds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with a raw value.
    #[must_use]
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Raw value for `key`, if any.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

fn try_load_posts(store: &impl KeyValueStore) -> Result<Vec<Post>, StorageError> {
    let Some(raw) = store.get_item(config::POSTS_KEY)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(StorageError::Decode)
}

/// Load the persisted post list. Absent or corrupt data yields an empty list.
pub fn load_posts(store: &impl KeyValueStore) -> Vec<Post> {
    match try_load_posts(store) {
        Ok(posts) => posts,
        Err(err) => {
            log::warn!("ignoring stored posts: {err}");
            Vec::new()
        }
    }
}

/// Serialize the full list and overwrite the stored value.
pub fn save_posts(store: &mut impl KeyValueStore, posts: &[Post]) -> Result<(), StorageError> {
    let raw = serde_json::to_string(posts)?;
    store.set_item(config::POSTS_KEY, &raw)
}

/// Load the persisted theme, defaulting to light.
pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    match store.get_item(config::THEME_KEY) {
        Ok(Some(raw)) => Theme::from_stored(&raw).unwrap_or_default(),
        Ok(None) => Theme::default(),
        Err(err) => {
            log::debug!("theme preference unavailable: {err}");
            Theme::default()
        }
    }
}

pub fn save_theme(store: &mut impl KeyValueStore, theme: Theme) -> Result<(), StorageError> {
    store.set_item(config::THEME_KEY, theme.as_str())
}
