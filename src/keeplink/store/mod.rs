//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the bookmark list lives so the
//! command layer can run against any backend.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole list is one JSON array in `bookmarks.json`
//!   - Every mutation is a read-modify-write of the full blob
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Blob Semantics
//!
//! A store holds a single insertion-ordered list. A missing or unreadable
//! (corrupt) blob reads as an empty list rather than an error; only genuine
//! filesystem failures surface. There is no locking: two processes writing
//! the same blob race last-write-wins.

use crate::error::Result;
use crate::model::Bookmark;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for bookmark storage.
pub trait DataStore {
    /// Read the full list, in insertion order. Absent or corrupt data
    /// reads as an empty list.
    fn load(&self) -> Result<Vec<Bookmark>>;

    /// Append one bookmark and persist the full list back as one write.
    fn append(&mut self, bookmark: &Bookmark) -> Result<()>;

    /// Drop every entry matching both fields exactly and persist the
    /// result. Removing a pair that is not stored is a no-op.
    fn remove(&mut self, name: &str, url: &str) -> Result<()>;

    /// Exact match on both fields. Used for duplicate detection.
    fn contains(&self, name: &str, url: &str) -> Result<bool> {
        Ok(self.load()?.iter().any(|b| b.matches(name, url)))
    }

    /// Path to the backing file, for file-based stores.
    fn data_path(&self) -> Option<PathBuf> {
        None
    }
}
