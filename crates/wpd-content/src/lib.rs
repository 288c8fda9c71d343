//! Content tree model and navigation queries for the webpack docs site.
//!
//! The site's indexing step emits a JSON tree of pages and sections
//! (`src/_content.json`). This crate provides:
//! - [`ContentNode`]: the parsed tree, split into [`Page`] leaves and
//!   [`Section`] containers at parse time
//! - [`ContentTree`]: explicit loading of the JSON index
//! - Traversal queries: [`flatten_content`], [`extract_sections`],
//!   [`extract_pages`], [`find_in_content`]
//! - Page head resolution: [`page_title`], [`page_description`], [`PageHead`]
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wpd_content::ContentTree;
//!
//! let tree = ContentTree::from_json(
//!     r#"{"children": [{"title": "Concepts", "url": "/concepts/", "type": "file"}]}"#,
//! )?;
//!
//! assert_eq!(tree.page_title("/concepts/"), "Concepts | webpack");
//! assert_eq!(tree.page_title("/missing/"), "webpack");
//! assert_eq!(tree.pages().len(), 1);
//! # Ok(())
//! # }
//! ```

mod head;
mod navigator;
mod node;
mod tree;

pub use head::{NOT_FOUND_ROBOTS, NOT_FOUND_TITLE, PageHead};
pub use navigator::{
    SITE_NAME, extract_pages, extract_sections, find_in_content, flatten_content,
    page_description, page_title, page_title_for_site,
};
pub use node::{ContentNode, NodeKind, Page, Section};
pub use tree::{ContentError, ContentTree};
