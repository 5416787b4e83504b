//! Content module - discovers, enriches and serves blog posts

mod enrich;
mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;
mod store;

pub use enrich::{link_posts, sort_posts, Enricher};
pub use error::{ContentError, FrontMatterError};
pub use frontmatter::{FrontMatter, PostMeta};
pub use markdown::MarkdownRenderer;
pub use post::{derive_slug, Post, PostRef, Preview, SourceDocument};
pub use store::{PageQuery, PostStore};
