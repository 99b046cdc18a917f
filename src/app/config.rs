//! Category mapping loading from the documentation tree.

use std::path::{Path, PathBuf};

use crate::domain::category_mapping::parse_mapping_content;
use crate::domain::{AppError, CategoryMapping, docs_paths};
use crate::ports::DocumentStore;

/// Load and parse the category mapping.
///
/// The mapping lives at `subcategories.yml` in the docs root unless
/// `override_path` points somewhere else. A missing or malformed file is
/// fatal; nothing has been mutated at this point.
pub fn load_mapping<S: DocumentStore>(
    store: &S,
    override_path: Option<&Path>,
) -> Result<CategoryMapping, AppError> {
    let path: PathBuf = match override_path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(docs_paths::MAPPING_FILE),
    };

    if !store.document_exists(&path) {
        return Err(AppError::MappingNotFound(path.display().to_string()));
    }

    let content = store.read_document(&path)?;
    parse_mapping_content(&content)
}
