//! Post models

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{ContentError, FrontMatter, PostMeta};

/// A discovered post before enrichment
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Source path, relative to the posts directory
    pub path: PathBuf,

    /// Slug derived from the path
    pub slug: String,

    /// `my-post/index.md` rather than `my-post.md`
    pub is_index_file: bool,

    /// Validated front-matter
    pub meta: PostMeta,

    /// Markdown body without front-matter
    pub body: String,
}

impl SourceDocument {
    /// Build a document from its path and raw file content
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, ContentError> {
        let path = path.into();
        let (slug, is_index_file) =
            derive_slug(&path).ok_or_else(|| ContentError::InvalidPath { path: path.clone() })?;

        let (fm, body) = FrontMatter::parse(content)
            .map_err(|source| ContentError::FrontMatter { path: path.clone(), source })?;
        let meta = fm
            .into_meta()
            .map_err(|source| ContentError::FrontMatter { path: path.clone(), source })?;

        Ok(Self {
            slug,
            is_index_file,
            meta,
            body: body.to_string(),
            path,
        })
    }
}

/// Derive `(slug, is_index_file)` from a post path
///
/// `posts/my-post/index.md` and `posts/my-post.md` both give `my-post`.
/// An `index` file with no parent directory has no slug.
pub fn derive_slug(path: &Path) -> Option<(String, bool)> {
    let stem = path.file_stem()?.to_str()?;

    if stem == "index" {
        let dir = path.parent()?.file_name()?.to_str()?;
        Some((dir.to_string(), true))
    } else if stem.is_empty() {
        None
    } else {
        Some((stem.to_string(), false))
    }
}

/// Post preview, shown on listing pages and in SEO descriptions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub html: String,
    /// Markup-free variant of `html`
    pub text: String,
}

/// Reference to a neighbouring post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRef {
    pub slug: String,
    pub title: String,
    pub article_id: i64,
}

/// A fully enriched blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// URL-friendly name, unique across posts
    pub slug: String,

    /// Ordering key, newest has the highest
    pub article_id: i64,

    pub title: String,

    pub date: Option<DateTime<Local>>,

    pub description: Option<String>,

    pub tags: Vec<String>,

    /// Whether the source is `my-post/index.md` or `my-post.md`
    pub is_index_file: bool,

    /// Source file path relative to the posts directory
    pub source: String,

    /// Rendered HTML content
    pub content: String,

    /// Preview from front-matter, if the author set one
    pub custom_preview: Option<String>,

    pub preview: Preview,

    /// E.g. "4 min read"
    pub reading_time: String,

    /// Newer post
    pub next: Option<PostRef>,

    /// Older post
    pub previous: Option<PostRef>,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Post {
    /// Lightweight reference to this post
    pub fn to_ref(&self) -> PostRef {
        PostRef {
            slug: self.slug.clone(),
            title: self.title.clone(),
            article_id: self.article_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_index_file() {
        assert_eq!(
            derive_slug(Path::new("/posts/foo/index.md")),
            Some(("foo".to_string(), true))
        );
        assert_eq!(
            derive_slug(Path::new("my-post/index.markdown")),
            Some(("my-post".to_string(), true))
        );
    }

    #[test]
    fn test_slug_from_flat_file() {
        assert_eq!(
            derive_slug(Path::new("/posts/bar.md")),
            Some(("bar".to_string(), false))
        );
        assert_eq!(
            derive_slug(Path::new("2021/rust-notes.md")),
            Some(("rust-notes".to_string(), false))
        );
    }

    #[test]
    fn test_slug_from_bare_index() {
        assert_eq!(derive_slug(Path::new("index.md")), None);
    }

    #[test]
    fn test_parse_source_document() {
        let doc = SourceDocument::parse(
            "/posts/foo/index.md",
            "---\narticleId: 4\ntitle: Foo\n---\nHello.",
        )
        .unwrap();
        assert_eq!(doc.slug, "foo");
        assert!(doc.is_index_file);
        assert_eq!(doc.meta.article_id, 4);
        assert_eq!(doc.body, "Hello.");
    }

    #[test]
    fn test_parse_source_document_missing_id() {
        let err = SourceDocument::parse("/posts/bar.md", "---\ntitle: Bar\n---\nHello.")
            .unwrap_err();
        assert!(err.to_string().contains("articleId"));
        assert!(err.to_string().contains("bar.md"));
    }
}
