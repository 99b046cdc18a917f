use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::DocumentStore;

/// Filesystem-based document store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemDocumentStore {
    root: PathBuf,
}

impl FilesystemDocumentStore {
    /// Create a document store for the given docs root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a document store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl DocumentStore for FilesystemDocumentStore {
    fn document_exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn read_document(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn write_document(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(self.resolve(path), content)?;
        Ok(())
    }

    fn list_documents(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let resolved = self.resolve(dir);
        if !resolved.is_dir() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();
        for entry in fs::read_dir(&resolved)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let relative = dir.join(entry.file_name());
            if relative.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }
            documents.push(relative);
        }

        documents.sort();
        Ok(documents)
    }
}
