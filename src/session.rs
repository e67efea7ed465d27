//! Bearer-token session storage.
//!
//! The session is a single token string under one storage key. It is written
//! once when OTP verification succeeds and read before every protected
//! request. There is no expiry tracking and no logout; the token disappears
//! only when storage is cleared from outside the app.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("Browser storage is unavailable")]
    Unavailable,

    #[error("Failed to write {key} to browser storage")]
    Write { key: String },
}

/// Holds at most one bearer token (single key, last write wins).
pub trait SessionStore {
    /// The stored token. Empty strings count as no token.
    fn token(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn save_token(&self, token: &str) -> Result<(), StorageError>;

    /// Whether a non-empty token is present
    fn has_session(&self) -> bool {
        self.token().is_some()
    }
}

/// In-memory store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token (does not count as a write).
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
            writes: Cell::new(0),
        }
    }

    /// Number of successful `save_token` calls
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Drop the token, as clearing site data would.
    pub fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone().filter(|t| !t.is_empty())
    }

    fn save_token(&self, token: &str) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(token.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Store backed by `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalSessionStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalSessionStore {
    fn token(&self) -> Option<String> {
        let storage = Self::storage()?;
        storage
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn save_token(&self, token: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(&self.key, token)
            .map_err(|_| StorageError::Write {
                key: self.key.clone(),
            })
    }
}

/// Platform store: localStorage in the browser, memory elsewhere.
pub fn platform_store(key: &str) -> Rc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalSessionStore::new(key))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(key, "Using in-memory session store");
        Rc::new(MemorySessionStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_no_session() {
        let store = MemorySessionStore::new();
        assert_eq!(store.token(), None);
        assert!(!store.has_session());
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemorySessionStore::new();
        store.save_token("first").unwrap();
        store.save_token("second").unwrap();

        assert_eq!(store.token().as_deref(), Some("second"));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemorySessionStore::with_token("");
        assert!(!store.has_session());
    }

    #[test]
    fn test_clear_removes_token() {
        let store = MemorySessionStore::with_token("tok");
        assert!(store.has_session());
        store.clear();
        assert!(!store.has_session());
        assert_eq!(store.write_count(), 0);
    }
}
