//! Feed generation from the content tree.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use wpd_content::{ContentNode, extract_sections};

use crate::FeedError;
use crate::date::extract_pub_date;
use crate::post::{BlogPost, is_post};
use crate::rss::{self, Channel};

/// Feed settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    /// Site origin without trailing slash (e.g. `https://webpack.js.org`).
    pub base_url: String,
    /// Channel title.
    pub title: String,
    /// Channel description.
    pub description: String,
    /// Channel language code.
    pub language: String,
    /// Name of the top-level directory holding posts.
    pub section: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://webpack.js.org".to_owned(),
            title: "webpack Blog".to_owned(),
            description: "Announcements and updates from the webpack team".to_owned(),
            language: "en".to_owned(),
            section: "blog".to_owned(),
        }
    }
}

/// Builds the blog RSS feed.
pub struct FeedGenerator {
    config: FeedConfig,
    root_dir: PathBuf,
}

impl FeedGenerator {
    /// Create a generator resolving post paths against the current directory.
    #[must_use]
    pub fn new(config: FeedConfig) -> Self {
        Self {
            config,
            root_dir: PathBuf::from("."),
        }
    }

    /// Set the directory that content node `path` fields are relative to.
    #[must_use]
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = root_dir.into();
        self
    }

    /// Feed settings.
    #[must_use]
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Collect the posts of the blog section, newest first.
    ///
    /// Posts with equal dates keep their navigation order.
    pub fn posts(
        &self,
        root: &ContentNode,
        now: DateTime<Utc>,
    ) -> Result<Vec<BlogPost>, FeedError> {
        let section = self.blog_section(root)?;

        let mut posts: Vec<BlogPost> = section
            .children()
            .iter()
            .filter(|child| is_post(child, &self.config.section))
            .map(|child| {
                let date = extract_pub_date(child, &self.root_dir, now);
                BlogPost::from_node(child, &self.config.base_url, date)
            })
            .collect();

        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    /// Render the feed as RSS 2.0 XML.
    pub fn render(&self, root: &ContentNode, now: DateTime<Utc>) -> Result<String, FeedError> {
        let posts = self.posts(root, now)?;
        self.render_posts(&posts, now)
    }

    /// Render the feed and write it to `output`, creating parent directories.
    ///
    /// Returns the number of posts written.
    pub fn write(
        &self,
        root: &ContentNode,
        output: &Path,
        now: DateTime<Utc>,
    ) -> Result<usize, FeedError> {
        let posts = self.posts(root, now)?;
        let xml = self.render_posts(&posts, now)?;

        let write_error = |source| FeedError::Write {
            path: output.to_path_buf(),
            source,
        };
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(output, xml).map_err(write_error)?;

        tracing::info!(path = %output.display(), post_count = posts.len(), "RSS feed written");
        Ok(posts.len())
    }

    fn render_posts(&self, posts: &[BlogPost], now: DateTime<Utc>) -> Result<String, FeedError> {
        let base_url = &self.config.base_url;
        let link = format!("{base_url}/{}/", self.config.section);
        let self_link = format!("{base_url}/feed.xml");

        let channel = Channel {
            title: &self.config.title,
            link: &link,
            description: &self.config.description,
            language: &self.config.language,
            self_link: &self_link,
            updated: now,
        };
        rss::render(&channel, posts)
    }

    fn blog_section<'a>(&self, root: &'a ContentNode) -> Result<&'a ContentNode, FeedError> {
        extract_sections(root)
            .into_iter()
            .find(|node| node.name() == Some(self.config.section.as_str()) && !node.is_leaf())
            .ok_or_else(|| FeedError::BlogSectionNotFound(self.config.section.clone()))
    }
}
