//! In-memory provider for testing

use super::ValueProvider;
use crate::error::Result;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory value source (not persisted)
#[derive(Debug)]
pub struct MemoryProvider {
    store: RwLock<HashMap<String, String>>,
}

impl MemoryProvider {
    /// Create an empty memory provider
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Create a provider pre-filled with `values`
    pub fn from_pairs<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            store: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Set a value
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut store) = self.store.write() {
            store.insert(name.into(), value.into());
        }
    }

    /// Remove a value
    pub fn remove(&self, name: &str) {
        if let Ok(mut store) = self.store.write() {
            store.remove(name);
        }
    }
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueProvider for MemoryProvider {
    fn lookup(&self, name: &str) -> Result<Option<String>> {
        Ok(self.store.read().ok().and_then(|s| s.get(name).cloned()))
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}

// =============================================================================
// Tests
// =============================================================================
