//! Persistent Key-Value Storage
//!
//! Capability-gated wrapper over `window.localStorage`. Code that needs
//! persistence goes through [`KeyValueStorage`] so it keeps working in
//! environments without a browser window (prerendering, unit tests).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key-value persistence.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed storage. Every operation silently no-ops when
/// the window or its storage is unavailable.
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-process storage for tests and non-interactive use.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Storage used by the running app.
pub fn default_storage() -> Rc<dyn KeyValueStorage> {
    Rc::new(BrowserStorage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        assert!(storage.get("auth_token").is_none());

        storage.set("auth_token", "tok");
        assert_eq!(storage.get("auth_token").as_deref(), Some("tok"));

        storage.remove("auth_token");
        assert!(storage.get("auth_token").is_none());
    }
}
