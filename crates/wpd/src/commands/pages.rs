//! `wpd pages` command implementation.

use clap::Args;
use wpd_config::CliSettings;
use wpd_content::{ContentNode, ContentTree};

use super::{load_config, load_tree};
use crate::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    /// List top-level sections instead of pages.
    #[arg(long)]
    sections: bool,

    /// Print nodes as a JSON array.
    #[arg(long)]
    json: bool,
}

impl PagesArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = load_config(global, CliSettings::default())?;
        let tree = load_tree(&config)?;

        let nodes = listed_nodes(&tree, self.sections);

        if self.json {
            output.data(&serde_json::to_string_pretty(&nodes)?);
            return Ok(());
        }

        for node in &nodes {
            output.data(&describe(node));
        }
        output.info(&format!("{} entries", nodes.len()));
        Ok(())
    }
}

/// Top-level sections, or every leaf page.
fn listed_nodes(tree: &ContentTree, sections: bool) -> Vec<&ContentNode> {
    if sections {
        tree.sections()
    } else {
        tree.pages()
    }
}

/// One-line listing of a node: URL (or name) and title.
fn describe(node: &ContentNode) -> String {
    let location = node.url().or_else(|| node.name()).unwrap_or("-");
    match node.title() {
        Some(title) => format!("{location}\t{title}"),
        None => location.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn node(json: &str) -> ContentNode {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_describe_page() {
        let page = node(r#"{"title": "Getting Started", "url": "/guides/getting-started/"}"#);

        assert_eq!(describe(&page), "/guides/getting-started/\tGetting Started");
    }

    #[test]
    fn test_describe_section_uses_name() {
        let section = node(r#"{"name": "guides", "children": []}"#);

        assert_eq!(describe(&section), "guides");
    }

    #[test]
    fn test_listed_nodes_pages_or_sections() {
        let tree = ContentTree::from_json(
            r#"{"children": [
                {"title": "Home", "url": "/"},
                {"name": "guides", "type": "directory", "children": [
                    {"title": "Getting Started", "url": "/guides/getting-started/"}
                ]}
            ]}"#,
        )
        .unwrap();

        let pages: Vec<_> = listed_nodes(&tree, false).iter().map(|n| n.url()).collect();
        assert_eq!(pages, vec![Some("/"), Some("/guides/getting-started/")]);

        let sections: Vec<_> = listed_nodes(&tree, true).iter().map(|n| n.name()).collect();
        assert_eq!(sections, vec![Some("guides")]);
    }
}
