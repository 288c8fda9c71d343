//! Blog post selection.

use chrono::{DateTime, Utc};
use wpd_content::ContentNode;

/// Fallback title for posts without one.
const UNTITLED: &str = "Untitled";

/// Source extensions that make a blog entry a post.
const POST_EXTENSIONS: [&str; 2] = [".md", ".mdx"];

/// File names inside the blog section that are not posts.
const EXCLUDED_NAMES: [&str; 4] = ["index.md", "index.mdx", "printable.md", "printable.mdx"];

/// A feed entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogPost {
    /// Post title.
    pub title: String,
    /// Absolute post URL, also used as the item guid.
    pub link: String,
    /// Summary, falling back to the title.
    pub description: String,
    /// Publish date.
    pub date: DateTime<Utc>,
}

impl BlogPost {
    /// Build a feed entry for `node`, linking relative to `base_url`.
    #[must_use]
    pub(crate) fn from_node(node: &ContentNode, base_url: &str, date: DateTime<Utc>) -> Self {
        let title = non_empty(node.title()).unwrap_or(UNTITLED);
        let description = non_empty(node.description())
            .or_else(|| non_empty(node.title()))
            .unwrap_or(UNTITLED);

        Self {
            title: title.to_owned(),
            link: format!("{base_url}{}", node.url().unwrap_or_default()),
            description: description.to_owned(),
            date,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Whether a direct child of the blog section is a post.
///
/// Posts are Markdown/MDX files other than the section index and the
/// combined printable page.
#[must_use]
pub fn is_post(node: &ContentNode, section: &str) -> bool {
    if !node.is_file() {
        return false;
    }
    if !node.extension().is_some_and(|ext| POST_EXTENSIONS.contains(&ext)) {
        return false;
    }
    if node.name().is_some_and(|name| EXCLUDED_NAMES.contains(&name)) {
        return false;
    }

    let section_url = format!("/{section}/");
    match node.url() {
        Some(url) => url != section_url && !url.contains("/printable"),
        None => true,
    }
}
