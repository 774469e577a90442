//! # Key-Value Persistence
//!
//! The only thing rollcall persists on the client side is a handful of small
//! string values (today just the sort preference). They live behind the
//! [`KeyValueStore`] trait so the preference logic can be tested without a disk.
//!
//! ## Implementations
//!
//! - [`fs::FileKvStore`]: a JSON object in `prefs.json` under the rollcall home
//!   directory. Every `set` rewrites the whole file.
//! - [`memory::InMemoryKvStore`]: a map, for tests.
//!
//! ```text
//! ~/.local/share/rollcall/
//! ├── prefs.json     # {"sort": "{\"field\":\"name\",\"order\":\"asc\"}"}
//! └── config.json    # client configuration, see config.rs
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait KeyValueStore {
    /// The stored value, or `None` if the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value`, replacing any previous value for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
