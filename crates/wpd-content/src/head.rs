//! Document head values for rendered pages.

use serde::Serialize;

use crate::navigator::{page_description, page_title_for_site};
use crate::node::ContentNode;

/// Title of the not-found page (without site suffix).
pub const NOT_FOUND_TITLE: &str = "Page Not Found";

/// Robots directive for the not-found page.
pub const NOT_FOUND_ROBOTS: &str = "noindex,nofollow";

/// `<head>` values for a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageHead {
    /// Document title.
    pub title: String,
    /// Meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Robots meta directive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
}

impl PageHead {
    /// Resolve the head for `url` from the content tree.
    ///
    /// Unknown URLs get the bare site name as title and no description; use
    /// [`PageHead::not_found`] when the router has decided the page is missing.
    #[must_use]
    pub fn resolve(tree: &ContentNode, url: &str, site_name: &str) -> Self {
        Self {
            title: page_title_for_site(tree, url, site_name),
            description: page_description(tree, url).map(str::to_owned),
            robots: None,
        }
    }

    /// Head for the not-found page.
    #[must_use]
    pub fn not_found(site_name: &str) -> Self {
        Self {
            title: format!("{NOT_FOUND_TITLE} | {site_name}"),
            description: None,
            robots: Some(NOT_FOUND_ROBOTS.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SITE_NAME;

    fn fixture() -> ContentNode {
        serde_json::from_str(include_str!("../fixtures/content.json")).unwrap()
    }

    #[test]
    fn test_resolve_known_page() {
        let head = PageHead::resolve(&fixture(), "/guides/getting-started/", SITE_NAME);

        assert_eq!(
            head,
            PageHead {
                title: "Getting Started | webpack".to_owned(),
                description: Some(
                    "Learn how to bundle a JavaScript application with webpack 5.".to_owned()
                ),
                robots: None,
            }
        );
    }

    #[test]
    fn test_resolve_unknown_page() {
        let head = PageHead::resolve(&fixture(), "/xyz", SITE_NAME);

        assert_eq!(head.title, "webpack");
        assert_eq!(head.description, None);
    }

    #[test]
    fn test_not_found_head() {
        let head = PageHead::not_found(SITE_NAME);

        assert_eq!(head.title, "Page Not Found | webpack");
        assert_eq!(head.robots.as_deref(), Some("noindex,nofollow"));
        assert_eq!(head.description, None);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let head = PageHead::resolve(&fixture(), "/concepts/", SITE_NAME);

        assert_eq!(
            serde_json::to_value(&head).unwrap(),
            serde_json::json!({"title": "Concepts | webpack"})
        );
    }
}
