//! Storage layer
//!
//! The durable substrate underneath the document store.
//!
//! ## Architecture
//!
//! - **KeyValue**: flat string store, the local stand-in for a remote API
//! - **FileKv**: one JSON file per key with atomic writes
//! - **MemoryKv**: shared in-memory map for tests
//!
//! The document store only ever touches three keys, see [`keys`].

pub mod error;
pub mod file;
pub mod kv;

pub use error::{Access, StorageError, StorageResult};
pub use file::FileKv;
pub use kv::{KeyValue, MemoryKv};

/// Well-known storage keys
pub mod keys {
    /// Ordered sequence of users, insertion order
    pub const USERS: &str = "db_users";
    /// Ordered sequence of artworks, newest first
    pub const ARTWORKS: &str = "db_artworks";
    /// Absent, or a single serialized user
    pub const SESSION: &str = "active_session";

    /// Every key the document store owns
    pub const ALL: [&str; 3] = [USERS, ARTWORKS, SESSION];

    /// Key holding the content `key` had before a reset
    pub fn backup(key: &str) -> String {
        format!("{}.bak", key)
    }
}
