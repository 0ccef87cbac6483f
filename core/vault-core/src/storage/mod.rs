//! Persisted key-value storage and path management.
//!
//! The session core persists three independent string flags. They live behind
//! the [`KeyValueStore`] trait so the controller never cares whether the medium
//! is a file on disk, an in-memory map, or unavailable entirely.
//!
//! ## Backends
//!
//! - [`FileStore`]: JSON object file under the storage root (production)
//! - [`MemoryStore`]: `HashMap` with an optional byte quota (tests, ephemeral runs)
//! - [`DisabledStore`]: fails every call, the "storage turned off" case
//!
//! ## Keys
//!
//! | Key | Value | Read back |
//! |---|---|---|
//! | [`VISITED_BEFORE_KEY`] | `"true"` or absent | hydration, visited check |
//! | [`LAST_SECTION_KEY`] | decimal integer | hydration |
//! | [`VISITED_AT_KEY`] | ISO-8601 timestamp | never |

mod file;
mod memory;

use std::path::{Path, PathBuf};

use crate::error::StorageError;

pub use file::FileStore;
pub use memory::{DisabledStore, MemoryStore};

pub const VISITED_BEFORE_KEY: &str = "prisi_ops_visited_before";
pub const LAST_SECTION_KEY: &str = "prisi_ops_last_section";
pub const VISITED_AT_KEY: &str = "prisi_ops_visited_at";

/// Synchronous string-keyed storage that is allowed to fail.
///
/// Implementations must never panic; every failure is reported as a
/// [`StorageError`] and the caller decides whether to care.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Central configuration for all Prisi Ops storage paths.
///
/// Production code uses `StorageConfig::default()` which points to `~/.prisi-ops/`.
/// Tests use `StorageConfig::with_root(temp_dir)` for isolation.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            root: home.join(".prisi-ops"),
        }
    }
}

impl StorageConfig {
    /// Creates a StorageConfig with a custom root directory.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to storage.json (the persisted session flags).
    pub fn storage_file(&self) -> PathBuf {
        self.root.join("storage.json")
    }

    /// Path to config.json (endpoint and timeout settings).
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Path to logs/ directory (rolling log files).
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}
