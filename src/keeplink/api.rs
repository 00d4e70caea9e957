//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! keeplink operations, regardless of the UI in front of it.
//!
//! `KeeplinkApi<S: DataStore>` is generic over the storage backend:
//! production wires in `FileStore`, tests wire in `InMemoryStore`. The
//! facade dispatches, never formats, and never touches stdout/stderr.

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;
use std::path::PathBuf;

pub struct KeeplinkApi<S: DataStore> {
    store: S,
    store_dir: PathBuf,
}

impl<S: DataStore> KeeplinkApi<S> {
    pub fn new(store: S, store_dir: PathBuf) -> Self {
        Self { store, store_dir }
    }

    pub fn add_bookmark(&mut self, name: &str, url: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, url)
    }

    pub fn list_bookmarks(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn remove_bookmark(&mut self, name: &str, url: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, name, url)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.store_dir, action)
    }

    pub fn data_path(&self) -> Option<PathBuf> {
        self.store.data_path()
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> KeeplinkApi<InMemoryStore> {
        KeeplinkApi::new(InMemoryStore::new(), PathBuf::from("."))
    }

    #[test]
    fn add_then_list_round_trips() {
        let mut api = api();
        api.add_bookmark("Docs", "example.com/api").unwrap();

        let result = api.list_bookmarks().unwrap();
        assert_eq!(result.bookmarks.len(), 1);
        assert_eq!(result.bookmarks[0].url, "https://example.com/api");
    }

    #[test]
    fn remove_dispatches_to_store() {
        let mut api = api();
        api.add_bookmark("Docs", "example.com").unwrap();
        api.remove_bookmark("Docs", "https://example.com").unwrap();

        assert!(api.list_bookmarks().unwrap().bookmarks.is_empty());
    }

    #[test]
    fn memory_store_has_no_data_path() {
        assert!(api().data_path().is_none());
    }
}
