//! List posts

use anyhow::Result;

use crate::content::{PageQuery, Post};
use crate::Blog;

/// Print one page of posts, newest first
pub fn run(blog: &Blog, query: PageQuery) -> Result<()> {
    let store = blog.load_posts()?;
    let posts = store.get_posts(query);

    match query.limit {
        Some(limit) if limit > 0 => println!(
            "Posts (page {}/{}, {} of {}):",
            query.page,
            store.page_count(limit),
            posts.len(),
            store.len()
        ),
        _ => println!("Posts ({}):", store.len()),
    }

    for post in posts {
        println!("  {}", format_line(post));
    }

    Ok(())
}

fn format_line(post: &Post) -> String {
    format!(
        "#{:<4} {} - {} ({}) [{}]",
        post.article_id, post.slug, post.title, post.reading_time, post.source
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Enricher, MarkdownRenderer, SourceDocument};

    #[test]
    fn test_format_line() {
        let doc = SourceDocument::parse(
            "hello/index.md",
            "---\narticleId: 12\ntitle: Hello\n---\nHi there.",
        )
        .unwrap();
        let renderer = MarkdownRenderer::new().unwrap();
        let post = Enricher::new(&renderer, 200).enrich(doc).unwrap();

        let line = format_line(&post);
        assert!(line.starts_with("#12   hello - Hello (1 min read)"));
        assert!(line.contains("index.md"));
    }
}
