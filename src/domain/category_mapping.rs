//! Category mapping parsed from `subcategories.yml`.

use crate::domain::AppError;

/// One category label with its document identifiers, in author order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    /// Human-readable grouping name injected into the marker line.
    pub category: String,
    /// Base filenames (without extension) of the documents in this category.
    pub documents: Vec<String>,
}

/// Ordered mapping of category labels to document identifiers.
///
/// Key uniqueness is assumed by config authoring, not enforced here, and
/// duplicate identifiers are kept as authored.
#[derive(Debug, Clone, Default)]
pub struct CategoryMapping {
    entries: Vec<CategoryEntry>,
}

impl CategoryMapping {
    /// Entries in the order they were authored.
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse and validate the category mapping from YAML content.
///
/// The root must be a mapping of string labels to sequences of string
/// identifiers; anything else is malformed and aborts the run before any
/// document is touched.
pub fn parse_mapping_content(content: &str) -> Result<CategoryMapping, AppError> {
    let root = serde_yaml::from_str::<serde_yaml::Value>(content)
        .map_err(|err| AppError::MalformedMapping(err.to_string()))?;

    let map = match root {
        serde_yaml::Value::Mapping(map) => map,
        _ => return Err(AppError::MalformedMapping("YAML root is not a mapping".to_string())),
    };

    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        let category = match key {
            serde_yaml::Value::String(category) => category,
            _ => {
                return Err(AppError::MalformedMapping(
                    "category labels must be strings".to_string(),
                ));
            }
        };

        let items = match value {
            serde_yaml::Value::Sequence(items) => items,
            _ => {
                return Err(AppError::MalformedMapping(format!(
                    "documents for '{}' must be a sequence",
                    category
                )));
            }
        };

        let mut documents = Vec::with_capacity(items.len());
        for item in items {
            match item {
                serde_yaml::Value::String(document) => documents.push(document),
                _ => {
                    return Err(AppError::MalformedMapping(format!(
                        "document identifiers under '{}' must be strings",
                        category
                    )));
                }
            }
        }

        entries.push(CategoryEntry { category, documents });
    }

    Ok(CategoryMapping { entries })
}
