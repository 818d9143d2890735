use std::cell::RefCell;
use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{Result, TracalError};

/// In-memory key-value store for testing.
///
/// Uses `RefCell` for interior mutability since tracal is single-threaded.
/// This avoids the overhead of a lock while still allowing the
/// `KeyValueStore` trait to use `&self` for all methods.
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TracalError::Store("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_roundtrip() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), "v");
    }

    #[test]
    fn get_absent_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn remove_drops_the_key() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn simulated_write_error_fails_set() {
        let store = MemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(store.set("k", "v").is_err());
    }
}
