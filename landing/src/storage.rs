//! Presence flags persisted in the browser.
//!
//! The page keeps exactly one durable bit (has the tour auto-run yet?), so
//! the store only knows how to check for a key and to set it.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::config::TOUR_SEEN_VALUE;
use crate::error::{LandingError, Result, describe_js};

/// Boolean flags keyed by name. Presence means `true`.
pub trait FlagStore {
    fn is_set(&self, key: &str) -> Result<bool>;
    fn set(&self, key: &str) -> Result<()>;
}

/// `window.localStorage`, resolved on every call so a store created before
/// storage is reachable still works later.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFlagStore;

impl LocalFlagStore {
    fn storage() -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(LandingError::StorageUnavailable)
    }
}

impl FlagStore for LocalFlagStore {
    fn is_set(&self, key: &str) -> Result<bool> {
        let value = Self::storage()?
            .get_item(key)
            .map_err(|e| LandingError::Storage {
                op: "read",
                key: key.to_string(),
                detail: describe_js(&e),
            })?;
        Ok(value.is_some())
    }

    fn set(&self, key: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, TOUR_SEEN_VALUE)
            .map_err(|e| LandingError::Storage {
                op: "write",
                key: key.to_string(),
                detail: describe_js(&e),
            })
    }
}

/// Non-persistent store. Lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    keys: RefCell<HashSet<String>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn is_set(&self, key: &str) -> Result<bool> {
        Ok(self.keys.borrow().contains(key))
    }

    fn set(&self, key: &str) -> Result<()> {
        self.keys.borrow_mut().insert(key.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryFlagStore::new();
        assert!(!store.is_set("krish-e-tour-seen").unwrap());
    }

    #[test]
    fn memory_store_set_is_sticky_and_per_key() {
        let store = MemoryFlagStore::new();
        store.set("a").unwrap();
        store.set("a").unwrap();
        assert!(store.is_set("a").unwrap());
        assert!(!store.is_set("b").unwrap());
    }
}
