//! Loading the content index.

use std::path::{Path, PathBuf};

use crate::navigator;
use crate::node::ContentNode;

/// Content loading error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Index file could not be read.
    #[error("Failed to read content index {}: {source}", .path.display())]
    Io {
        /// Path of the index file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// JSON text is not a valid content tree.
    #[error("Invalid content index: {0}")]
    Parse(#[from] serde_json::Error),
    /// Index file is not a valid content tree.
    #[error("Invalid content index {}: {source}", .path.display())]
    ParseFile {
        /// Path of the index file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Parsed content tree.
///
/// Constructed once from the JSON index and never mutated. Queries borrow the
/// tree, so a single instance can be shared by reference across renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentTree {
    root: ContentNode,
}

impl ContentTree {
    /// Wrap an already-built root node.
    #[must_use]
    pub fn new(root: ContentNode) -> Self {
        Self { root }
    }

    /// Parse a tree from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let root = serde_json::from_str(json)?;
        Ok(Self::new(root))
    }

    /// Load a tree from a JSON index file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root: ContentNode =
            serde_json::from_str(&json).map_err(|source| ContentError::ParseFile {
                path: path.to_path_buf(),
                source,
            })?;

        let tree = Self::new(root);
        tracing::debug!(
            path = %path.display(),
            page_count = tree.pages().len(),
            "Content index loaded"
        );
        Ok(tree)
    }

    /// Root node of the tree.
    #[must_use]
    pub fn root(&self) -> &ContentNode {
        &self.root
    }

    /// See [`flatten_content`](crate::flatten_content).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ContentNode> {
        navigator::flatten_content(&self.root)
    }

    /// See [`extract_sections`](crate::extract_sections).
    #[must_use]
    pub fn sections(&self) -> Vec<&ContentNode> {
        navigator::extract_sections(&self.root)
    }

    /// See [`extract_pages`](crate::extract_pages).
    #[must_use]
    pub fn pages(&self) -> Vec<&ContentNode> {
        navigator::extract_pages(&self.root)
    }

    /// See [`find_in_content`](crate::find_in_content).
    pub fn find<P>(&self, predicate: P) -> Option<&ContentNode>
    where
        P: FnMut(&ContentNode) -> bool,
    {
        navigator::find_in_content(&self.root, predicate)
    }

    /// See [`page_title`](crate::page_title).
    #[must_use]
    pub fn page_title(&self, url: &str) -> String {
        navigator::page_title(&self.root, url)
    }

    /// See [`page_description`](crate::page_description).
    #[must_use]
    pub fn page_description(&self, url: &str) -> Option<&str> {
        navigator::page_description(&self.root, url)
    }
}

impl From<ContentNode> for ContentTree {
    fn from(root: ContentNode) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const FIXTURE: &str = include_str!("../fixtures/content.json");

    #[test]
    fn test_from_json_parses_fixture() {
        let tree = ContentTree::from_json(FIXTURE).unwrap();

        assert_eq!(tree.root().name(), Some("content"));
        assert_eq!(tree.sections().len(), 3);
    }

    #[test]
    fn test_from_json_invalid_returns_parse_error() {
        let result = ContentTree::from_json("{\"children\": 42}");

        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_load_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("_content.json");
        fs::write(&path, FIXTURE).unwrap();

        let tree = ContentTree::load(&path).unwrap();

        assert_eq!(tree.page_title("/guides/getting-started/"), "Getting Started | webpack");
        assert_eq!(tree.page_description("/printable/"), Some(""));
    }

    #[test]
    fn test_load_missing_file_returns_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = ContentTree::load(&path).unwrap_err();

        assert!(matches!(err, ContentError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_invalid_json_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();

        let err = ContentTree::load(&path).unwrap_err();

        assert!(matches!(err, ContentError::ParseFile { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_find_delegates_to_root() {
        let tree = ContentTree::from_json(FIXTURE).unwrap();

        let blog = tree.find(|node| node.name() == Some("blog")).unwrap();

        assert!(blog.is_directory());
        assert_eq!(blog.children().len(), 3);
    }
}
