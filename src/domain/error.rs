use std::io;

use thiserror::Error;

/// Library-wide error type for subcat operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Category mapping file is missing.
    #[error("Category mapping not found at {0}")]
    MappingNotFound(String),

    /// Category mapping file does not hold a usable mapping.
    #[error("Malformed category mapping: {0}")]
    MalformedMapping(String),

    /// A check found documents whose subcategory marker is still empty.
    #[error("{0} document(s) still carry an empty subcategory")]
    UnannotatedDocuments(usize),

    /// A report could not be encoded for output.
    #[error("Failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}
