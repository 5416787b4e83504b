//! Immutable, ordered post collection with a paged accessor

use std::collections::HashMap;

use super::Post;

/// Which slice of posts to return
///
/// `page` is 1-indexed. Without a `limit` (or with a limit of 0) the whole
/// collection is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: usize,
    pub limit: Option<usize>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: None,
        }
    }
}

impl PageQuery {
    /// Every post
    pub fn all() -> Self {
        Self::default()
    }

    /// One page of `limit` posts
    pub fn page(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit: Some(limit),
        }
    }
}

/// Posts sorted newest first and linked to their neighbours
///
/// Built once by [`crate::Blog::load_posts`] and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    by_slug: HashMap<String, usize>,
}

impl PostStore {
    /// Wrap posts that are already sorted and linked
    pub(crate) fn new(posts: Vec<Post>) -> Self {
        let by_slug = posts
            .iter()
            .enumerate()
            .map(|(i, p)| (p.slug.clone(), i))
            .collect();
        Self { posts, by_slug }
    }

    /// Return all posts, or one page of them
    ///
    /// Out-of-range pages (including page 0) yield an empty slice.
    pub fn get_posts(&self, query: PageQuery) -> &[Post] {
        let limit = match query.limit {
            Some(limit) if limit > 0 => limit,
            _ => return &self.posts,
        };

        if query.page == 0 {
            return &[];
        }

        let start = (query.page - 1).saturating_mul(limit);
        if start >= self.posts.len() {
            return &[];
        }
        let end = start.saturating_add(limit).min(self.posts.len());

        &self.posts[start..end]
    }

    /// All posts, newest first
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Number of pages of `limit` posts
    pub fn page_count(&self, limit: usize) -> usize {
        if limit == 0 {
            return 1;
        }
        self.posts.len().div_ceil(limit)
    }

    /// Look up a post by slug
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug).map(|&i| &self.posts[i])
    }

    /// The newer neighbour of `post`
    pub fn next(&self, post: &Post) -> Option<&Post> {
        post.next.as_ref().and_then(|r| self.get(&r.slug))
    }

    /// The older neighbour of `post`
    pub fn previous(&self, post: &Post) -> Option<&Post> {
        post.previous.as_ref().and_then(|r| self.get(&r.slug))
    }
}
