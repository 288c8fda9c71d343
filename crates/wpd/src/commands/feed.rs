//! `wpd feed` command implementation.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use wpd_config::{CliSettings, Config};
use wpd_feed::{FeedConfig, FeedGenerator};

use super::{load_config, load_tree};
use crate::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the feed command.
#[derive(Args)]
pub(crate) struct FeedArgs {
    /// Output file for the feed (default: dist/feed.xml).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Site origin used for links (overrides config).
    #[arg(long, env = "WPD_BASE_URL")]
    base_url: Option<String>,

    /// Directory that content source paths are relative to (overrides config).
    #[arg(long)]
    root_dir: Option<PathBuf>,
}

impl FeedArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();

        let config = load_config(
            global,
            CliSettings {
                root_dir: self.root_dir,
                base_url: self.base_url,
                feed_output: self.output,
                ..CliSettings::default()
            },
        )?;
        let tree = load_tree(&config)?;

        output.info(&format!(
            "Content: {}",
            config.content_resolved.index.display()
        ));

        let generator = FeedGenerator::new(feed_config(&config))
            .with_root_dir(config.content_resolved.root_dir.clone());
        let destination = &config.feed_resolved.output;
        let count = generator.write(tree.root(), destination, Utc::now())?;

        output.success(&format!(
            "Generated RSS feed with {count} posts at {}",
            destination.display()
        ));
        Ok(())
    }
}

/// Map resolved configuration onto generator settings.
fn feed_config(config: &Config) -> FeedConfig {
    let feed = &config.feed_resolved;
    FeedConfig {
        base_url: feed.base_url.clone(),
        title: feed.title.clone(),
        description: feed.description.clone(),
        language: feed.language.clone(),
        section: feed.section.clone(),
    }
}
