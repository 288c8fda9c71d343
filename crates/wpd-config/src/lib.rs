//! Configuration management for wpd.
//!
//! Parses `wpd.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `feed.base_url` supports environment variable expansion, so preview
//! deployments can point the feed at their own origin:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content index path.
    pub content_index: Option<PathBuf>,
    /// Override root directory for content source paths.
    pub root_dir: Option<PathBuf>,
    /// Override site name.
    pub site_name: Option<String>,
    /// Override feed base URL.
    pub base_url: Option<String>,
    /// Override feed output path.
    pub feed_output: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "wpd.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Content index configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Feed configuration as parsed from TOML.
    feed: FeedConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Resolved feed configuration (set after loading).
    #[serde(skip)]
    pub feed_resolved: FeedConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name appended to page titles.
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "webpack".to_owned(),
        }
    }
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    index: Option<String>,
    root_dir: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Content tree JSON produced by the indexer.
    pub index: PathBuf,
    /// Directory that node `path` fields are relative to.
    pub root_dir: PathBuf,
}

/// Raw feed configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FeedConfigRaw {
    base_url: Option<String>,
    title: Option<String>,
    description: Option<String>,
    language: Option<String>,
    section: Option<String>,
    output: Option<String>,
}

/// Resolved RSS feed configuration.
#[derive(Debug)]
pub struct FeedConfig {
    /// Site origin without trailing slash.
    pub base_url: String,
    /// Channel title.
    pub title: String,
    /// Channel description.
    pub description: String,
    /// Channel language code.
    pub language: String,
    /// Top-level content directory holding posts.
    pub section: String,
    /// Output file for the generated feed.
    pub output: PathBuf,
}

impl FeedConfig {
    fn default_with_base(base: &Path) -> Self {
        Self {
            base_url: "https://webpack.js.org".to_owned(),
            title: "webpack Blog".to_owned(),
            description: "Announcements and updates from the webpack team".to_owned(),
            language: "en".to_owned(),
            section: "blog".to_owned(),
            output: base.join("dist/feed.xml"),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`feed.base_url`").
        field: String,
        /// Error message (e.g., "${`SITE_ORIGIN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `wpd.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(index) = &settings.content_index {
            self.content_resolved.index.clone_from(index);
        }
        if let Some(root_dir) = &settings.root_dir {
            self.content_resolved.root_dir.clone_from(root_dir);
        }
        if let Some(site_name) = &settings.site_name {
            self.site.name.clone_from(site_name);
        }
        if let Some(base_url) = &settings.base_url {
            self.feed_resolved.base_url = trim_base_url(base_url);
        }
        if let Some(output) = &settings.feed_output {
            self.feed_resolved.output.clone_from(output);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            content: ContentConfigRaw::default(),
            feed: FeedConfigRaw::default(),
            content_resolved: ContentConfig {
                index: base.join("src/_content.json"),
                root_dir: base.to_path_buf(),
            },
            feed_resolved: FeedConfig::default_with_base(base),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.name, "site.name")?;

        let feed = &self.feed_resolved;
        require_non_empty(&feed.base_url, "feed.base_url")?;
        require_http_url(&feed.base_url, "feed.base_url")?;
        require_non_empty(&feed.section, "feed.section")?;
        if feed.section.contains('/') {
            return Err(ConfigError::Validation(
                "feed.section must be a top-level directory name".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.feed.base_url {
            self.feed.base_url = Some(expand::expand_env(url, "feed.base_url")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory and fill defaults.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.content_resolved = ContentConfig {
            index: resolve(self.content.index.as_deref(), "src/_content.json"),
            root_dir: resolve(self.content.root_dir.as_deref(), "."),
        };

        let defaults = FeedConfig::default_with_base(config_dir);
        let feed = &self.feed;
        self.feed_resolved = FeedConfig {
            base_url: feed
                .base_url
                .as_deref()
                .map_or(defaults.base_url, trim_base_url),
            title: feed.title.clone().unwrap_or(defaults.title),
            description: feed.description.clone().unwrap_or(defaults.description),
            language: feed.language.clone().unwrap_or(defaults.language),
            section: feed.section.clone().unwrap_or(defaults.section),
            output: resolve(feed.output.as_deref(), "dist/feed.xml"),
        };
    }
}

/// Strip trailing slashes so links can be joined with absolute URL paths.
fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_owned()
}
