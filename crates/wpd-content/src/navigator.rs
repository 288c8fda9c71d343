//! Traversal queries over the content tree.
//!
//! All queries borrow the tree and return references into it. Traversal is
//! pre-order (node before children, left to right), so results follow the
//! site's navigation order.

use crate::node::ContentNode;

/// Site name appended to page titles.
pub const SITE_NAME: &str = "webpack";

/// URL of the home page, whose title is never suffixed.
const HOME_URL: &str = "/";

/// Collect every leaf reachable from `tree`, in pre-order.
///
/// Containers are omitted; only their descendants contribute. A leaf passed
/// directly yields itself, and a section with no children yields nothing.
#[must_use]
pub fn flatten_content(tree: &ContentNode) -> Vec<&ContentNode> {
    fn collect<'a>(node: &'a ContentNode, out: &mut Vec<&'a ContentNode>) {
        if node.is_leaf() {
            out.push(node);
            return;
        }
        for child in node.children() {
            collect(child, out);
        }
    }

    let mut leaves = Vec::new();
    collect(tree, &mut leaves);
    leaves
}

/// Immediate children of `tree` tagged `"directory"`, in order.
#[must_use]
pub fn extract_sections(tree: &ContentNode) -> Vec<&ContentNode> {
    tree.children()
        .iter()
        .filter(|child| child.is_directory())
        .collect()
}

/// Every page reachable from `tree`, in pre-order.
///
/// Pages are the leaves of the tree, so this is [`flatten_content`].
#[must_use]
pub fn extract_pages(tree: &ContentNode) -> Vec<&ContentNode> {
    flatten_content(tree)
}

/// Find the first node in pre-order for which `predicate` returns `true`.
///
/// Internal nodes are tested as well as leaves, starting with `tree` itself.
/// The search stops at the first match.
pub fn find_in_content<P>(tree: &ContentNode, mut predicate: P) -> Option<&ContentNode>
where
    P: FnMut(&ContentNode) -> bool,
{
    fn visit<'a>(
        node: &'a ContentNode,
        predicate: &mut dyn FnMut(&ContentNode) -> bool,
    ) -> Option<&'a ContentNode> {
        if predicate(node) {
            return Some(node);
        }
        node.children()
            .iter()
            .find_map(|child| visit(child, predicate))
    }

    visit(tree, &mut predicate)
}

fn find_by_url<'a>(tree: &'a ContentNode, url: &str) -> Option<&'a ContentNode> {
    find_in_content(tree, |node| node.url() == Some(url))
}

/// Resolve the document title for `url`.
///
/// Returns `"<title> | webpack"` for a known page, the bare title for the
/// home page, and `"webpack"` when the URL is unknown or the page has no
/// title. URLs are matched exactly.
#[must_use]
pub fn page_title(tree: &ContentNode, url: &str) -> String {
    page_title_for_site(tree, url, SITE_NAME)
}

/// [`page_title`] with a custom site name.
#[must_use]
pub fn page_title_for_site(tree: &ContentNode, url: &str, site_name: &str) -> String {
    let title = find_by_url(tree, url)
        .and_then(ContentNode::title)
        .filter(|title| !title.is_empty());

    match title {
        Some(title) if url == HOME_URL => title.to_owned(),
        Some(title) => format!("{title} | {site_name}"),
        None => site_name.to_owned(),
    }
}

/// Resolve the description for `url`.
///
/// Returns `None` when no node has this URL or the node has no description.
/// An explicitly empty description is returned as `Some("")`.
#[must_use]
pub fn page_description<'a>(tree: &'a ContentNode, url: &str) -> Option<&'a str> {
    find_by_url(tree, url).and_then(ContentNode::description)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    const FIXTURE: &str = include_str!("../fixtures/content.json");

    fn fixture() -> ContentNode {
        serde_json::from_str(FIXTURE).unwrap()
    }

    fn parse(value: serde_json::Value) -> ContentNode {
        serde_json::from_value(value).unwrap()
    }

    fn titles<'a>(nodes: &[&'a ContentNode]) -> Vec<&'a str> {
        nodes.iter().filter_map(|node| node.title()).collect()
    }

    // find_in_content

    #[test]
    fn test_find_home_page() {
        let content = fixture();

        let page = find_in_content(&content, |item| item.url() == Some("/")).unwrap();

        assert_eq!(page.title(), Some("webpack"));
    }

    #[test]
    fn test_find_returns_none_without_match() {
        let content = fixture();

        assert!(find_in_content(&content, |_| false).is_none());
    }

    #[test]
    fn test_find_visits_root_and_internal_nodes() {
        let tree = parse(json!({
            "title": "Root",
            "children": [{"title": "Section", "children": [{"title": "Leaf"}]}]
        }));

        let root = find_in_content(&tree, |_| true).unwrap();
        let section = find_in_content(&tree, |n| n.title() == Some("Section")).unwrap();

        assert_eq!(root.title(), Some("Root"));
        assert!(!section.is_leaf());
    }

    #[test]
    fn test_find_returns_first_preorder_match() {
        let tree = parse(json!({
            "children": [
                {"children": [{"title": "X", "url": "/deep/"}]},
                {"title": "X", "url": "/shallow/"}
            ]
        }));

        let found = find_in_content(&tree, |n| n.title() == Some("X")).unwrap();

        assert_eq!(found.url(), Some("/deep/"));
    }

    #[test]
    fn test_find_stops_after_first_match() {
        let tree = parse(json!({
            "children": [{"title": "A"}, {"title": "B"}, {"title": "C"}]
        }));
        let mut visited = Vec::new();

        find_in_content(&tree, |n| {
            visited.push(n.title().map(str::to_owned));
            n.title() == Some("B")
        });

        assert_eq!(
            visited,
            vec![None, Some("A".to_owned()), Some("B".to_owned())]
        );
    }

    // page_description

    #[test]
    fn test_description_unknown_page_is_none() {
        let content = fixture();

        assert_eq!(page_description(&content, "/xyz"), None);
    }

    #[test]
    fn test_description_printable_page_is_empty() {
        let content = fixture();

        assert_eq!(page_description(&content, "/printable/"), Some(""));
    }

    #[test]
    fn test_description_getting_started() {
        let content = fixture();

        assert_eq!(
            page_description(&content, "/guides/getting-started/"),
            Some("Learn how to bundle a JavaScript application with webpack 5.")
        );
    }

    #[test]
    fn test_description_missing_field_is_none() {
        let content = fixture();

        assert_eq!(page_description(&content, "/concepts/"), None);
    }

    // page_title

    #[test]
    fn test_title_unknown_page_is_site_name() {
        let content = fixture();

        assert_eq!(page_title(&content, "/xzy"), "webpack");
    }

    #[test]
    fn test_title_printable_page() {
        let content = fixture();

        assert_eq!(
            page_title(&content, "/printable/"),
            "Combined printable page | webpack"
        );
    }

    #[test]
    fn test_title_getting_started() {
        let content = fixture();

        assert_eq!(
            page_title(&content, "/guides/getting-started/"),
            "Getting Started | webpack"
        );
    }

    #[test]
    fn test_title_home_page_is_not_suffixed() {
        let content = fixture();

        assert_eq!(page_title(&content, "/"), "webpack");
    }

    #[test]
    fn test_title_requires_exact_url() {
        let content = fixture();

        assert_eq!(page_title(&content, "/guides/getting-started"), "webpack");
    }

    #[test]
    fn test_title_without_title_field_is_site_name() {
        let tree = parse(json!({
            "children": [{"url": "/untitled/"}, {"url": "/empty/", "title": ""}]
        }));

        assert_eq!(page_title(&tree, "/untitled/"), "webpack");
        assert_eq!(page_title(&tree, "/empty/"), "webpack");
    }

    #[test]
    fn test_title_for_custom_site() {
        let content = fixture();

        assert_eq!(
            page_title_for_site(&content, "/concepts/", "webpack docs"),
            "Concepts | webpack docs"
        );
    }

    // flatten_content

    #[test]
    fn test_flatten_returns_leaves_in_preorder() {
        let tree = parse(json!({
            "children": [
                {"title": "A"},
                {"children": [{"title": "B"}, {"children": [{"title": "C"}]}]},
                {"title": "D"}
            ]
        }));

        let flat = flatten_content(&tree);

        assert_eq!(titles(&flat), vec!["A", "B", "C", "D"]);
        assert!(flat.iter().all(|node| node.is_leaf()));
    }

    #[test]
    fn test_flatten_empty_children_contributes_nothing() {
        let tree = parse(json!({"children": [{"children": []}, {"title": "A"}]}));

        assert_eq!(titles(&flatten_content(&tree)), vec!["A"]);
    }

    #[test]
    fn test_flatten_leaf_yields_itself() {
        let leaf = parse(json!({"title": "Only"}));

        assert_eq!(titles(&flatten_content(&leaf)), vec!["Only"]);
    }

    #[test]
    fn test_flatten_fixture_excludes_containers() {
        let content = fixture();

        let flat = flatten_content(&content);

        assert!(flat.iter().all(|node| node.children().is_empty()));
        assert!(flat.iter().any(|node| node.url() == Some("/guides/getting-started/")));
        assert!(!flat.iter().any(|node| node.name() == Some("guides")));
    }

    // extract_sections

    #[test]
    fn test_extract_sections_returns_immediate_directories() {
        let tree = parse(json!({
            "children": [
                {"title": "A", "type": "file"},
                {
                    "title": "B",
                    "type": "directory",
                    "children": [
                        {"title": "C", "type": "file"},
                        {"title": "D ", "type": "directory", "children": [{"title": "E"}]}
                    ]
                },
                {"title": "F", "type": "file"}
            ]
        }));

        let sections = extract_sections(&tree);

        assert_eq!(sections.len(), 1);
        assert_eq!(
            serde_json::to_value(sections[0]).unwrap(),
            json!({
                "title": "B",
                "type": "directory",
                "children": [
                    {"title": "C", "type": "file"},
                    {"title": "D ", "type": "directory", "children": [{"title": "E"}]}
                ]
            })
        );
    }

    #[test]
    fn test_extract_sections_of_leaf_is_empty() {
        let leaf = parse(json!({"title": "A", "type": "file"}));

        assert!(extract_sections(&leaf).is_empty());
    }

    #[test]
    fn test_extract_sections_fixture_order() {
        let content = fixture();

        let names: Vec<_> = extract_sections(&content)
            .iter()
            .filter_map(|node| node.name())
            .collect();

        assert_eq!(names, vec!["concepts", "guides", "blog"]);
    }

    // extract_pages

    #[test]
    fn test_extract_pages_returns_files_recursively() {
        let tree = parse(json!({
            "children": [
                {"title": "A", "type": "file", "extension": ".md"},
                {
                    "title": "B",
                    "type": "directory",
                    "children": [
                        {"title": "C", "type": "file", "extension": ".mdx"},
                        {
                            "title": "D",
                            "type": "directory",
                            "children": [{"title": "E", "type": "file", "extension": ".md"}]
                        }
                    ]
                },
                {"title": "F", "type": "file", "extension": ".mdx"}
            ]
        }));

        let pages = extract_pages(&tree);

        assert_eq!(
            serde_json::to_value(&pages).unwrap(),
            json!([
                {"title": "A", "type": "file", "extension": ".md"},
                {"title": "C", "type": "file", "extension": ".mdx"},
                {"title": "E", "type": "file", "extension": ".md"},
                {"title": "F", "type": "file", "extension": ".mdx"}
            ])
        );
    }

    #[test]
    fn test_extract_pages_matches_flatten() {
        let content = fixture();

        assert_eq!(extract_pages(&content), flatten_content(&content));
    }
}
