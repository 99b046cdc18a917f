//! Shared testing harness for `subcat` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A Markdown page the way the docs generator emits it, marker unfilled.
pub(crate) const UNANNOTATED_DOC: &str =
    "---\npage_title: \"Sample Page\"\nsubcategory: \"\"\n---\n\n# Sample Page\n";

/// Testing harness providing an isolated documentation tree for CLI
/// exercises.
pub(crate) struct TestContext {
    root: TempDir,
    docs_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated docs tree with both document roots present.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let docs_dir = root.path().join("docs");
        fs::create_dir_all(docs_dir.join("resources"))
            .expect("Failed to create resources directory");
        fs::create_dir_all(docs_dir.join("data-sources"))
            .expect("Failed to create data-sources directory");

        Self { root, docs_dir }
    }

    /// Path to the docs root used for CLI invocations.
    pub(crate) fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    /// Write the category mapping at its default location.
    pub(crate) fn write_mapping(&self, content: &str) {
        fs::write(self.docs_dir.join("subcategories.yml"), content)
            .expect("Failed to write category mapping");
    }

    /// Path to a resource document.
    pub(crate) fn resource_path(&self, id: &str) -> PathBuf {
        self.docs_dir.join("resources").join(format!("{id}.md"))
    }

    /// Path to a data-source document.
    pub(crate) fn data_source_path(&self, id: &str) -> PathBuf {
        self.docs_dir.join("data-sources").join(format!("{id}.md"))
    }

    /// Write a resource document.
    pub(crate) fn write_resource(&self, id: &str, content: &str) {
        fs::write(self.resource_path(id), content).expect("Failed to write resource document");
    }

    /// Write a data-source document.
    pub(crate) fn write_data_source(&self, id: &str, content: &str) {
        fs::write(self.data_source_path(id), content)
            .expect("Failed to write data-source document");
    }

    /// Read a resource document back.
    pub(crate) fn read_resource(&self, id: &str) -> String {
        fs::read_to_string(self.resource_path(id)).expect("Failed to read resource document")
    }

    /// Read a data-source document back.
    pub(crate) fn read_data_source(&self, id: &str) -> String {
        fs::read_to_string(self.data_source_path(id))
            .expect("Failed to read data-source document")
    }

    /// Build a command for invoking the compiled `subcat` binary within the
    /// docs root.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("subcat").expect("Failed to locate subcat binary");
        cmd.current_dir(&self.docs_dir);
        cmd
    }
}
