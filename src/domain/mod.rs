pub mod category_mapping;
pub mod docs_paths;
pub mod error;

pub use category_mapping::{CategoryEntry, CategoryMapping};
pub use error::AppError;
