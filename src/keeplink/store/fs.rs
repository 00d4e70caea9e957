use super::DataStore;
use crate::error::{KeeplinkError, Result};
use crate::model::Bookmark;
use std::fs;
use std::path::PathBuf;

pub const DATA_FILENAME: &str = "bookmarks.json";

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DATA_FILENAME.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    fn file_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(KeeplinkError::Io)?;
        }
        Ok(())
    }

    fn read_list(&self) -> Result<Vec<Bookmark>> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(KeeplinkError::Io)?;
        // A blob that fails to deserialize is treated as no data, same as
        // the missing-file case. It is never surfaced to the caller.
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn write_list(&self, bookmarks: &[Bookmark]) -> Result<()> {
        self.ensure_dir()?;
        let content =
            serde_json::to_string_pretty(bookmarks).map_err(KeeplinkError::Serialization)?;
        fs::write(self.file_path(), content).map_err(KeeplinkError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Bookmark>> {
        self.read_list()
    }

    fn append(&mut self, bookmark: &Bookmark) -> Result<()> {
        let mut bookmarks = self.read_list()?;
        bookmarks.push(bookmark.clone());
        self.write_list(&bookmarks)
    }

    fn remove(&mut self, name: &str, url: &str) -> Result<()> {
        let mut bookmarks = self.read_list()?;
        bookmarks.retain(|b| !b.matches(name, url));
        self.write_list(&bookmarks)
    }

    fn data_path(&self) -> Option<PathBuf> {
        Some(self.file_path())
    }
}
