use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Filesystem seam for the documentation tree.
///
/// All paths are relative to the store root, the docs directory the tool
/// was invoked in.
pub trait DocumentStore {
    /// Whether a document exists at `path`.
    fn document_exists(&self, path: &Path) -> bool;

    /// Read the full text of the document at `path`.
    fn read_document(&self, path: &Path) -> Result<String, AppError>;

    /// Overwrite the document at `path` with `content`.
    fn write_document(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// List Markdown documents directly under `dir`, sorted by path.
    ///
    /// A missing directory yields an empty list.
    fn list_documents(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError>;
}
