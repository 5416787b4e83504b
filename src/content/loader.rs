//! Content loader - discovers posts in the posts directory

use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::{ContentError, Enricher, MarkdownRenderer, PostStore, SourceDocument};
use crate::Blog;

/// Loads and enriches posts from the posts directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> anyhow::Result<Self> {
        let renderer = MarkdownRenderer::with_options(&blog.config.highlight)?;
        Ok(Self { blog, renderer })
    }

    /// Discover, enrich, sort and link every post
    pub fn load_posts(&self) -> Result<PostStore, ContentError> {
        let documents = self.discover()?;
        let enricher = Enricher::new(&self.renderer, self.blog.config.words_per_minute);
        enricher.enrich_all(documents)
    }

    /// Collect every post document under the posts directory
    ///
    /// A post is either a flat markdown file directly in the posts directory
    /// or an `index` markdown file at any depth below it. Other markdown
    /// files inside post directories are left alone. Hidden files and
    /// directories are skipped. Documents come back in file-name order so
    /// that loading is deterministic.
    pub fn discover(&self) -> Result<Vec<SourceDocument>, ContentError> {
        let posts_dir = &self.blog.posts_dir;
        if !posts_dir.exists() {
            tracing::warn!("Posts directory {:?} does not exist", posts_dir);
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_post_file(&entry) {
                continue;
            }

            let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let relative = path.strip_prefix(posts_dir).unwrap_or(path);

            let doc = SourceDocument::parse(relative, &content)?;
            tracing::debug!("Discovered post {:?} -> {}", relative, doc.slug);
            documents.push(doc);
        }

        Ok(documents)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// `posts/<slug>.md` or `posts/**/index.md`
fn is_post_file(entry: &DirEntry) -> bool {
    let path = entry.path();
    if !is_markdown_file(path) {
        return false;
    }

    entry.depth() == 1 || path.file_stem().and_then(|s| s.to_str()) == Some("index")
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
