//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::info;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub name: String,
    pub website: String,

    // Directory
    pub posts_dir: String,
    pub public_dir: String,

    // Listing
    pub per_page: usize,

    // Writing
    pub words_per_minute: usize,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: info::NAME.to_string(),
            website: info::WEBSITE.to_string(),

            posts_dir: "posts".to_string(),
            public_dir: "public".to_string(),

            per_page: 10,

            words_per_minute: 200,
            highlight: HighlightConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.name, "Ben Heidemann Limited");
        assert_eq!(config.website, "https://heidemann.dev");
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.words_per_minute, 200);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
name: My Blog
website: https://example.com/
per_page: 5
highlight:
  line_number: true
analytics: abc123
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "My Blog");
        assert_eq!(config.per_page, 5);
        assert!(config.highlight.line_number);
        assert_eq!(config.highlight.theme, "base16-ocean.dark");
        assert_eq!(config.posts_dir, "posts");
        assert!(config.extra.contains_key("analytics"));
    }
}
