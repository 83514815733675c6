#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{KeyValueStore, StoreError};

/// In-memory store used by tests, playing the role of a browser
/// localStorage mock.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what the controller wrote. `write_log` records the keys passed
/// to `set`, in order, for write-count assertions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    writes: Vec<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys written via `set` since construction, in call order.
    #[must_use]
    pub fn write_log(&self) -> Vec<String> {
        self.inner.lock().expect("store lock").writes.clone()
    }

    /// Number of entries currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().expect("store lock").entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().expect("store lock").entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("store lock");
        inner.entries.insert(key.to_owned(), value.to_owned());
        inner.writes.push(key.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.inner.lock().expect("store lock").entries.remove(key);
    }

    fn clear(&mut self) {
        self.inner.lock().expect("store lock").entries.clear();
    }
}
