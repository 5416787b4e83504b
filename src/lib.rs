//! mdposts: build-time loader for markdown blog posts
//!
//! Discovers posts under the posts directory, renders them, derives a slug,
//! preview and reading time for each, orders them newest first and links
//! every post to its neighbours. The result is an immutable [`content::PostStore`]
//! with a paged accessor, meant to be built once at startup and shared.

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
compile_error!(
    "mdposts reads posts from the file system and cannot run in the browser, fetch /posts.json instead"
);

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod info;

use anyhow::Result;
use std::path::Path;

/// A blog rooted at a directory
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Posts directory
    pub posts_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            public_dir,
        })
    }

    /// Discover and enrich every post
    pub fn load_posts(&self) -> Result<content::PostStore> {
        let start = std::time::Instant::now();
        let loader = content::loader::ContentLoader::new(self)?;
        let store = loader.load_posts()?;
        tracing::info!(
            "Loaded {} posts in {:.2}s",
            store.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(store)
    }

    /// Write a page of posts as JSON
    pub fn export(&self, query: content::PageQuery, output: Option<&Path>) -> Result<()> {
        commands::export::run(self, query, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_uses_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.name, info::NAME);
        assert_eq!(blog.posts_dir, dir.path().join("posts"));
        assert_eq!(blog.public_dir, dir.path().join("public"));
    }

    #[test]
    fn test_new_reads_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "name: Notes\nposts_dir: content/posts\n",
        )
        .unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.name, "Notes");
        assert_eq!(blog.config.website, info::WEBSITE);
        assert_eq!(blog.posts_dir, dir.path().join("content/posts"));
    }
}
