//! Check command implementation: audit the tree for unfilled markers.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{AppError, CategoryMapping, docs_paths};
use crate::ports::DocumentStore;

/// A mapped identifier with no document in either root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingDocument {
    /// Category the identifier was listed under.
    pub category: String,
    /// The identifier with no backing file.
    pub document: String,
}

/// Result of a check pass.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Store-relative paths of documents still carrying the empty marker.
    pub unannotated: Vec<PathBuf>,
    /// Mapped identifiers that resolve to no file in either root.
    pub missing: Vec<MissingDocument>,
}

impl CheckReport {
    /// Whether every document in the tree carries a subcategory.
    ///
    /// Missing documents do not fail a check; file absence is never an
    /// error in this tool.
    pub fn is_clean(&self) -> bool {
        self.unannotated.is_empty()
    }
}

/// Execute the check command.
///
/// Scans every Markdown file under both document roots, not just the mapped
/// ones, so hand-added pages with an unfilled marker are caught too.
pub fn execute<S>(store: &S, mapping: &CategoryMapping) -> Result<CheckReport, AppError>
where
    S: DocumentStore,
{
    let mut unannotated = Vec::new();
    for root in docs_paths::DOCUMENT_ROOTS {
        for path in store.list_documents(Path::new(root))? {
            let content = store.read_document(&path)?;
            if content.contains(docs_paths::EMPTY_SUBCATEGORY) {
                unannotated.push(path);
            }
        }
    }

    let mut missing = Vec::new();
    for entry in mapping.entries() {
        for identifier in &entry.documents {
            let exists = docs_paths::DOCUMENT_ROOTS
                .iter()
                .any(|root| store.document_exists(&docs_paths::document_file(root, identifier)));
            if !exists {
                missing.push(MissingDocument {
                    category: entry.category.clone(),
                    document: identifier.clone(),
                });
            }
        }
    }

    Ok(CheckReport { unannotated, missing })
}
