use super::DataStore;
use crate::error::Result;
use crate::model::Bookmark;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    bookmarks: Vec<Bookmark>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Bookmark>> {
        Ok(self.bookmarks.clone())
    }

    fn append(&mut self, bookmark: &Bookmark) -> Result<()> {
        self.bookmarks.push(bookmark.clone());
        Ok(())
    }

    fn remove(&mut self, name: &str, url: &str) -> Result<()> {
        self.bookmarks.retain(|b| !b.matches(name, url));
        Ok(())
    }
}
