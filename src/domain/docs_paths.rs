use std::path::{Path, PathBuf};

/// Default category mapping file at the docs root.
pub const MAPPING_FILE: &str = "subcategories.yml";

/// Directory holding resource documentation pages.
pub const RESOURCES_DIR: &str = "resources";

/// Directory holding data-source documentation pages.
pub const DATA_SOURCES_DIR: &str = "data-sources";

/// Both document roots, in the order they are processed.
pub const DOCUMENT_ROOTS: [&str; 2] = [RESOURCES_DIR, DATA_SOURCES_DIR];

/// The placeholder line emitted by the docs generator before annotation.
pub const EMPTY_SUBCATEGORY: &str = "subcategory: \"\"";

/// `<root>/<identifier>.md`
pub fn document_file(root: &str, identifier: &str) -> PathBuf {
    Path::new(root).join(format!("{identifier}.md"))
}

/// `subcategory: "<category>"`
pub fn subcategory_line(category: &str) -> String {
    format!("subcategory: \"{category}\"")
}
