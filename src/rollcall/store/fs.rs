use super::KeyValueStore;
use crate::error::{RollcallError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILENAME: &str = "prefs.json";

pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(PREFS_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RollcallError::Io)?;
        }
        Ok(())
    }

    fn load_entries(&self) -> Result<BTreeMap<String, String>> {
        let file = self.path();
        if !file.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(file).map_err(RollcallError::Io)?;
        let entries = serde_json::from_str(&content).map_err(RollcallError::Serialization)?;
        Ok(entries)
    }

    fn save_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(entries).map_err(RollcallError::Serialization)?;
        fs::write(self.path(), content).map_err(RollcallError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut entries = self.load_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)
    }
}
