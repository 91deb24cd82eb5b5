//! One-read-then-clear notification store
//!
//! Holds short-lived fragments keyed by an opaque id. A stored value is
//! removed when read, so a fragment is shown at most once. The debug mail
//! backend writes its diagnostic output here; the host application drains
//! it when rendering the next response.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-process flash store, cheap to clone and share
#[derive(Debug, Clone, Default)]
pub struct FlashStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a key, replacing any previous value
    pub fn put(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner
            .lock()
            .expect("flash store lock poisoned")
            .insert(key.into(), value.into());
    }

    /// Remove and return the value under a key
    pub fn take(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .expect("flash store lock poisoned")
            .remove(key)
    }

    /// Remove and return all stored entries, keyed by id
    pub fn drain(&self) -> Vec<(String, String)> {
        self.inner
            .lock()
            .expect("flash store lock poisoned")
            .drain()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("flash store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
