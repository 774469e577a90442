use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory key-value store for testing.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryKvStore {
    entries: HashMap<String, String>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for InMemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
