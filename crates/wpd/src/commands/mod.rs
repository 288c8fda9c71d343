//! CLI command implementations.

mod copy_text;
mod feed;
mod page;
mod pages;

pub(crate) use copy_text::CopyTextArgs;
pub(crate) use feed::FeedArgs;
pub(crate) use page::PageArgs;
pub(crate) use pages::PagesArgs;

use wpd_config::{CliSettings, Config};
use wpd_content::ContentTree;

use crate::GlobalArgs;
use crate::error::CliError;

/// Load configuration, applying global and command-specific overrides.
fn load_config(global: &GlobalArgs, settings: CliSettings) -> Result<Config, CliError> {
    let settings = CliSettings {
        content_index: global.content.clone(),
        ..settings
    };
    Ok(Config::load(global.config.as_deref(), Some(&settings))?)
}

/// Load the content tree named by the configuration.
fn load_tree(config: &Config) -> Result<ContentTree, CliError> {
    Ok(ContentTree::load(&config.content_resolved.index)?)
}
