//! `wpd page` command implementation.

use clap::Args;
use wpd_config::CliSettings;
use wpd_content::{ContentTree, PageHead};

use super::{load_config, load_tree};
use crate::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Canonical page URL (e.g. /guides/getting-started/).
    url: String,

    /// Print the head as JSON.
    #[arg(long)]
    json: bool,
}

impl PageArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = load_config(global, CliSettings::default())?;
        let tree = load_tree(&config)?;
        let site_name = &config.site.name;

        let head = known_head(&tree, &self.url, site_name).unwrap_or_else(|| {
            output.warning(&format!("No page with URL {}", self.url));
            PageHead::not_found(site_name)
        });

        if self.json {
            output.data(&serde_json::to_string_pretty(&head)?);
            return Ok(());
        }

        output.field("title:", &head.title);
        if let Some(description) = &head.description {
            output.field("description:", description);
        }
        if let Some(robots) = &head.robots {
            output.field("robots:", robots);
        }
        Ok(())
    }
}

/// Head of the page at `url`, or `None` when no node has that URL.
fn known_head(tree: &ContentTree, url: &str, site_name: &str) -> Option<PageHead> {
    tree.find(|node| node.url() == Some(url))
        .map(|_| PageHead::resolve(tree.root(), url, site_name))
}
