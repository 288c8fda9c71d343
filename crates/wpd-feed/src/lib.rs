//! Blog RSS feed generation for the webpack docs site.
//!
//! Posts are the Markdown/MDX files directly inside the blog section of the
//! content tree. Each post gets a publish date inferred from its file name,
//! its title, or its file modification time, and the feed lists posts newest
//! first as RSS 2.0.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use chrono::Utc;
//! use wpd_content::ContentTree;
//! use wpd_feed::{FeedConfig, FeedGenerator};
//!
//! let tree = ContentTree::from_json(r#"{"children": [{
//!     "name": "blog", "type": "directory", "children": [{
//!         "name": "2020-10-10-webpack-5-release.md", "type": "file", "extension": ".md",
//!         "title": "Webpack 5 release", "url": "/blog/2020-10-10-webpack-5-release/"
//!     }]
//! }]}"#)?;
//!
//! let generator = FeedGenerator::new(FeedConfig::default());
//! let xml = generator.render(tree.root(), Utc::now())?;
//! assert!(xml.contains("<title>Webpack 5 release</title>"));
//! # Ok(())
//! # }
//! ```

mod date;
mod generator;
mod post;
mod rss;

pub use date::extract_pub_date;
pub use generator::{FeedConfig, FeedGenerator};
pub use post::{BlogPost, is_post};

use std::path::PathBuf;

/// Feed generation error.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The tree has no blog section with children.
    #[error("Blog section '{0}' not found in content tree")]
    BlogSectionNotFound(String),
    /// XML writer error.
    #[error("XML write error: {0}")]
    Io(#[from] std::io::Error),
    /// Writing the feed file failed.
    #[error("Failed to write feed to {}: {source}", .path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Rendered feed is not valid UTF-8.
    #[error("Invalid UTF-8 in feed: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
