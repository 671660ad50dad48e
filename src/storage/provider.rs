//! Storage providers: the read/write boundary under the expense repository
//!
//! A provider maps to one text resource. The repository only ever loads it
//! whole and saves it whole.

use std::path::{Path, PathBuf};

use crate::error::ExpenseResult;

use super::file_io::{read_text, write_text_atomic};

/// Abstract load/save contract over a single text resource
pub trait StorageProvider {
    /// Read the whole resource; `None` if it does not exist yet
    fn load(&self) -> ExpenseResult<Option<String>>;

    /// Replace the whole resource with `text`
    fn save(&mut self, text: &str) -> ExpenseResult<()>;
}

/// Provider backed by a single file on disk
///
/// There is no file locking: two processes mutating the same file race and
/// the last writer wins. Each write is atomic, so the file always holds one
/// complete snapshot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageProvider for FileStorage {
    fn load(&self) -> ExpenseResult<Option<String>> {
        read_text(&self.path)
    }

    fn save(&mut self, text: &str) -> ExpenseResult<()> {
        write_text_atomic(&self.path, text)
    }
}

/// Provider that keeps the resource in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
}

impl MemoryStorage {
    /// An empty provider, as if the file did not exist
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider pre-filled with `text`
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
        }
    }

    /// What was last saved (or the initial contents)
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl StorageProvider for MemoryStorage {
    fn load(&self) -> ExpenseResult<Option<String>> {
        Ok(self.contents.clone())
    }

    fn save(&mut self, text: &str) -> ExpenseResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("expenses.json"));

        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_file_storage_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path().join("data").join("expenses.json"));

        storage.save("[]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[]"));
        assert!(storage.path().exists());
    }

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.load().unwrap(), None);

        storage.save("[1]").unwrap();
        assert_eq!(storage.contents(), Some("[1]"));
        assert_eq!(MemoryStorage::with_contents("x").load().unwrap().as_deref(), Some("x"));
    }
}
