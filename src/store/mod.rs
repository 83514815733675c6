//! Persistent key-value storage for cached credentials.
//!
//! DESIGN
//! ======
//! The web client persisted into browser `localStorage`; this crate
//! keeps the same narrow surface (get/set/remove/clear, string values,
//! two well-known keys) behind a trait so the controller never touches
//! the filesystem directly. [`FileStore`] is the production
//! implementation; [`MemoryStore`] backs tests.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "cc_token";

/// Storage key for the JSON-serialized user record.
pub const USER_KEY: &str = "cc_user";

/// Errors produced by the file-backed store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage directory unavailable at {path}: {source}")]
    Directory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage write failed for {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Local key-value storage, mirroring the browser `localStorage`
/// surface. Reads and removals are best-effort;
/// only writes can fail in a way the caller might want to log.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str);

    fn clear(&mut self);
}
