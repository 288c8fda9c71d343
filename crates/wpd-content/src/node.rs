//! Content tree node types.
//!
//! The indexer emits one JSON shape for every node and marks containers only
//! by the presence of a `children` array. Parsing goes through a raw node struct and
//! resolves each node once into a [`Page`] leaf or a [`Section`] container, so
//! queries never have to inspect the shape again.

use serde::{Deserialize, Deserializer, Serialize};

/// Node category as tagged by the indexer (`type` field).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A Markdown/MDX source file.
    File,
    /// A directory of pages.
    Directory,
}

/// Leaf node: a single renderable page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Canonical site path (e.g. `/guides/getting-started/`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Summary text. `Some("")` is an explicitly empty description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// File name (e.g. `2020-10-10-webpack-5-release.md`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source path relative to the site root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Node category, absent in hand-written trees.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    /// File extension including the dot (e.g. `.mdx`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Container node: a section grouping child nodes in navigation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Canonical site path, absent on pure containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Summary text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Directory name (e.g. `blog`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source path relative to the site root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Node category, absent in hand-written trees.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    /// Child nodes in navigation order.
    pub children: Vec<ContentNode>,
}

/// A node in the content tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentNode {
    /// Leaf page.
    Page(Page),
    /// Container with children.
    Section(Section),
}

impl ContentNode {
    /// Display title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Page(page) => page.title.as_deref(),
            Self::Section(section) => section.title.as_deref(),
        }
    }

    /// Canonical site path, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Page(page) => page.url.as_deref(),
            Self::Section(section) => section.url.as_deref(),
        }
    }

    /// Description, if the field is present (possibly empty).
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Page(page) => page.description.as_deref(),
            Self::Section(section) => section.description.as_deref(),
        }
    }

    /// File or directory name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Page(page) => page.name.as_deref(),
            Self::Section(section) => section.name.as_deref(),
        }
    }

    /// Source path relative to the site root, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Page(page) => page.path.as_deref(),
            Self::Section(section) => section.path.as_deref(),
        }
    }

    /// Node category tag, if any.
    #[must_use]
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            Self::Page(page) => page.kind,
            Self::Section(section) => section.kind,
        }
    }

    /// File extension. Always `None` for sections.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        match self {
            Self::Page(page) => page.extension.as_deref(),
            Self::Section(_) => None,
        }
    }

    /// Child nodes. Empty for pages.
    #[must_use]
    pub fn children(&self) -> &[ContentNode] {
        match self {
            Self::Page(_) => &[],
            Self::Section(section) => &section.children,
        }
    }

    /// Whether this node is a leaf (has no `children` field).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Page(_))
    }

    /// Whether this node is tagged `"directory"`.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.kind() == Some(NodeKind::Directory)
    }

    /// Whether this node is tagged `"file"`.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind() == Some(NodeKind::File)
    }
}

impl<'de> Deserialize<'de> for ContentNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawNode::deserialize(deserializer).map(RawNode::into_node)
    }
}

/// Node as emitted by the indexer, before resolving leaf vs container.
#[derive(Deserialize)]
struct RawNode {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<NodeKind>,
    #[serde(default)]
    extension: Option<String>,
    #[serde(default)]
    children: Option<Vec<RawNode>>,
}

impl RawNode {
    fn into_node(self) -> ContentNode {
        match self.children {
            Some(children) => ContentNode::Section(Section {
                title: self.title,
                url: self.url,
                description: self.description,
                name: self.name,
                path: self.path,
                kind: self.kind,
                children: children.into_iter().map(Self::into_node).collect(),
            }),
            None => ContentNode::Page(Page {
                title: self.title,
                url: self.url,
                description: self.description,
                name: self.name,
                path: self.path,
                kind: self.kind,
                extension: self.extension,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> ContentNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_node_without_children_is_page() {
        let node = parse(json!({"title": "A", "type": "file", "extension": ".md"}));

        assert!(node.is_leaf());
        assert_eq!(node.title(), Some("A"));
        assert_eq!(node.kind(), Some(NodeKind::File));
        assert_eq!(node.extension(), Some(".md"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_node_with_children_is_section() {
        let node = parse(json!({
            "title": "Guides",
            "type": "directory",
            "children": [{"title": "A"}, {"title": "B"}]
        }));

        assert!(!node.is_leaf());
        assert!(node.is_directory());
        let titles: Vec<_> = node.children().iter().map(ContentNode::title).collect();
        assert_eq!(titles, vec![Some("A"), Some("B")]);
    }

    #[test]
    fn test_empty_children_is_section() {
        let node = parse(json!({"title": "Empty", "children": []}));

        assert!(matches!(node, ContentNode::Section(ref s) if s.children.is_empty()));
    }

    #[test]
    fn test_leaf_tagged_directory_stays_leaf() {
        let node = parse(json!({"title": "Odd", "type": "directory"}));

        assert!(node.is_leaf());
        assert!(node.is_directory());
    }

    #[test]
    fn test_empty_description_is_preserved() {
        let with_empty = parse(json!({"url": "/printable/", "description": ""}));
        let without = parse(json!({"url": "/printable/"}));

        assert_eq!(with_empty.description(), Some(""));
        assert_eq!(without.description(), None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let node = parse(json!({"title": "A", "size": 123, "anchors": []}));

        assert_eq!(node.title(), Some("A"));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = serde_json::from_value::<ContentNode>(json!({"type": "symlink"}));

        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_keeps_indexer_shape() {
        let value = json!({
            "title": "B",
            "type": "directory",
            "children": [{"title": "C", "type": "file", "extension": ".mdx"}]
        });

        let node = parse(value.clone());

        assert_eq!(serde_json::to_value(&node).unwrap(), value);
    }
}
