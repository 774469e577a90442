//! Sort preference persistence.
//!
//! `load` never fails: a missing, unreadable or malformed value gives the
//! default spec and a warning in the log. `save` reports write failures.

use crate::error::Result;
use crate::pipeline::SortSpec;
use crate::store::KeyValueStore;
use tracing::warn;

pub const SORT_KEY: &str = "sort";

pub struct SortPreferences<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> SortPreferences<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn load(&self) -> SortSpec {
        let raw = match self.store.get(SORT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return SortSpec::default(),
            Err(e) => {
                warn!(error = %e, "could not read sort preference, using default");
                return SortSpec::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, value = %raw, "malformed sort preference, using default");
            SortSpec::default()
        })
    }

    pub fn save(&mut self, spec: SortSpec) -> Result<()> {
        let raw = serde_json::to_string(&spec)?;
        self.store.set(SORT_KEY, &raw)
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}
