//! Annotate command implementation: fill empty subcategory markers.

use std::path::PathBuf;

use crate::domain::{AppError, CategoryMapping, docs_paths};
use crate::ports::DocumentStore;

/// Options for the annotate command.
#[derive(Debug, Default)]
pub struct AnnotateOptions {
    /// Report planned rewrites without writing any file.
    pub dry_run: bool,
}

/// Result of an annotation pass.
#[derive(Debug)]
pub struct AnnotateReport {
    /// Store-relative paths that were rewritten (or would be, on a dry run).
    pub updated: Vec<PathBuf>,
    /// Existing documents whose marker was already filled in.
    pub unchanged: usize,
    /// (category, identifier) pairs with no document in either root.
    pub missing: usize,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

/// Execute the annotate command.
///
/// Walks the mapping in author order. For each identifier, both candidate
/// documents (`resources/<id>.md`, `data-sources/<id>.md`) are rewritten if
/// they exist; absent candidates are skipped without comment. Every
/// occurrence of the empty marker in a matched document is replaced with the
/// category-tagged line. The first read or write failure aborts the run.
pub fn execute<S>(
    store: &S,
    mapping: &CategoryMapping,
    options: AnnotateOptions,
) -> Result<AnnotateReport, AppError>
where
    S: DocumentStore,
{
    let mut updated = Vec::new();
    let mut unchanged = 0;
    let mut missing = 0;

    for entry in mapping.entries() {
        let replacement = docs_paths::subcategory_line(&entry.category);

        for identifier in &entry.documents {
            let mut found = false;

            for root in docs_paths::DOCUMENT_ROOTS {
                let path = docs_paths::document_file(root, identifier);
                if !store.document_exists(&path) {
                    continue;
                }
                found = true;

                let content = store.read_document(&path)?;
                if !content.contains(docs_paths::EMPTY_SUBCATEGORY) {
                    unchanged += 1;
                    continue;
                }

                let annotated = content.replace(docs_paths::EMPTY_SUBCATEGORY, &replacement);
                if !options.dry_run {
                    store.write_document(&path, &annotated)?;
                }
                updated.push(path);
            }

            if !found {
                missing += 1;
            }
        }
    }

    Ok(AnnotateReport { updated, unchanged, missing, dry_run: options.dry_run })
}
