//! Post enrichment: render, preview, reading time, ordering and sibling links

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::PathBuf;

use super::{ContentError, MarkdownRenderer, Post, PostStore, Preview, SourceDocument};
use crate::helpers::{first_paragraph, structured_text, ReadingTime};

/// Turns source documents into an ordered, linked [`PostStore`]
pub struct Enricher<'a> {
    renderer: &'a MarkdownRenderer,
    words_per_minute: usize,
}

impl<'a> Enricher<'a> {
    pub fn new(renderer: &'a MarkdownRenderer, words_per_minute: usize) -> Self {
        Self {
            renderer,
            words_per_minute,
        }
    }

    /// Enrich every document, then sort and link. Fails on the first bad document.
    pub fn enrich_all(&self, documents: Vec<SourceDocument>) -> Result<PostStore, ContentError> {
        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        let mut posts = Vec::with_capacity(documents.len());

        for doc in documents {
            if let Some(first) = seen.get(&doc.slug) {
                return Err(ContentError::DuplicateSlug {
                    slug: doc.slug.clone(),
                    first: first.clone(),
                    second: doc.path.clone(),
                });
            }
            seen.insert(doc.slug.clone(), doc.path.clone());

            let post = self.enrich(doc)?;
            tracing::debug!(
                "Enriched post {} (articleId {}, {})",
                post.slug,
                post.article_id,
                post.reading_time
            );
            posts.push(post);
        }

        sort_posts(&mut posts);
        warn_duplicate_ids(&posts);
        link_posts(&mut posts);

        Ok(PostStore::new(posts))
    }

    /// Render one document and derive its preview and reading time
    pub fn enrich(&self, doc: SourceDocument) -> Result<Post, ContentError> {
        let content = self
            .renderer
            .render(&doc.body)
            .map_err(|e| ContentError::Render {
                path: doc.path.clone(),
                message: e.to_string(),
            })?;

        let preview_html = match &doc.meta.preview {
            Some(custom) => custom.clone(),
            None => first_paragraph(&content)
                .ok_or_else(|| ContentError::MissingPreview {
                    path: doc.path.clone(),
                })?
                .to_string(),
        };
        let preview = Preview {
            text: structured_text(&preview_html),
            html: preview_html,
        };

        let reading_time =
            ReadingTime::estimate(&structured_text(&content), self.words_per_minute).text;

        let meta = doc.meta;
        Ok(Post {
            slug: doc.slug,
            article_id: meta.article_id,
            title: meta.title,
            date: meta.date,
            description: meta.description,
            tags: meta.tags,
            is_index_file: doc.is_index_file,
            source: doc.path.to_string_lossy().to_string(),
            content,
            custom_preview: meta.preview,
            preview,
            reading_time,
            next: None,
            previous: None,
            extra: meta.extra,
        })
    }
}

/// Newest first: `article_id` descending, ties by slug ascending
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(compare_posts);
}

fn compare_posts(a: &Post, b: &Post) -> Ordering {
    b.article_id
        .cmp(&a.article_id)
        .then_with(|| a.slug.cmp(&b.slug))
}

/// Point each post at its neighbours in an already sorted slice
pub fn link_posts(posts: &mut [Post]) {
    let refs: Vec<_> = posts.iter().map(Post::to_ref).collect();

    for (i, post) in posts.iter_mut().enumerate() {
        post.next = i.checked_sub(1).map(|j| refs[j].clone());
        post.previous = refs.get(i + 1).cloned();
    }
}

fn warn_duplicate_ids(sorted: &[Post]) {
    for pair in sorted.windows(2) {
        if pair[0].article_id == pair[1].article_id {
            tracing::warn!(
                "Posts {} and {} share articleId {}, ordering them by slug",
                pair[0].slug,
                pair[1].slug,
                pair[0].article_id
            );
        }
    }
}
