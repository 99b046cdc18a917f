use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::DocumentStore;

/// In-memory document store for testing.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryDocumentStore {
    // Arc<Mutex> so a test can keep a handle while a command borrows the store
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryDocumentStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seed a document at a store-relative path.
    pub(crate) fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.lock().unwrap().insert(path.into(), content.into());
    }

    /// Current content of a document, if present.
    pub(crate) fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn document_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn read_document(&self, path: &Path) -> Result<String, AppError> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
        })
    }

    fn write_document(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_documents(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let files = self.files.lock().unwrap();
        let mut documents: Vec<PathBuf> = files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("md"))
            .cloned()
            .collect();
        documents.sort();
        Ok(documents)
    }
}
