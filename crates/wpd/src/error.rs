//! CLI error types.

use std::path::PathBuf;

use wpd_config::ConfigError;
use wpd_content::ContentError;
use wpd_feed::FeedError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Feed(#[from] FeedError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
