//! subcat: Annotate Terraform provider documentation with subcategory labels.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use std::path::Path;

use app::commands::{annotate, check};
use services::FilesystemDocumentStore;

pub use app::commands::annotate::{AnnotateOptions, AnnotateReport};
pub use app::commands::check::{CheckReport, MissingDocument};
pub use domain::AppError;

/// Fill empty subcategory markers in the current directory's documentation
/// tree.
///
/// Loads the category mapping (`subcategories.yml` unless `config` points
/// elsewhere) and rewrites every existing candidate document. Identifiers
/// without a backing file are skipped.
pub fn annotate(config: Option<&Path>, dry_run: bool) -> Result<AnnotateReport, AppError> {
    let store = FilesystemDocumentStore::current()?;
    let mapping = app::config::load_mapping(&store, config)?;

    let report = annotate::execute(&store, &mapping, AnnotateOptions { dry_run })?;
    if report.dry_run {
        for path in &report.updated {
            println!("would annotate {}", path.display());
        }
        println!("✅ {} document(s) to annotate", report.updated.len());
    } else {
        println!("✅ Annotated {} document(s)", report.updated.len());
    }
    Ok(report)
}

/// Audit the current directory's documentation tree.
///
/// Returns the documents still carrying an empty subcategory marker and the
/// mapped identifiers with no backing file; printing and exit status are
/// left to the caller.
pub fn check(config: Option<&Path>) -> Result<CheckReport, AppError> {
    let store = FilesystemDocumentStore::current()?;
    let mapping = app::config::load_mapping(&store, config)?;

    check::execute(&store, &mapping)
}
