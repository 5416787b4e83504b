//! Export posts as JSON for the `/posts.json` endpoint

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::PageQuery;
use crate::Blog;

/// Write the selected posts to `output`, or `<public_dir>/posts.json`
pub fn run(blog: &Blog, query: PageQuery, output: Option<&Path>) -> Result<()> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(blog));

    let store = blog.load_posts()?;
    let posts = store.get_posts(query);
    let json = serde_json::to_string_pretty(posts)?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }
    fs::write(&output, json).with_context(|| format!("Failed to write {:?}", output))?;

    tracing::info!("Exported {} posts to {:?}", posts.len(), output);
    Ok(())
}

fn default_output(blog: &Blog) -> PathBuf {
    blog.public_dir.join("posts.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_post(root: &Path, name: &str, id: i64, extra: &str) {
        let dir = root.join("posts");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(name),
            format!("---\narticleId: {}\ntitle: Post {}\n{}---\nBody {}.\n", id, id, extra, id),
        )
        .unwrap();
    }

    #[test]
    fn test_export_all() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "one.md", 1, "series: basics\n");
        write_post(dir.path(), "two.md", 2, "");

        let blog = Blog::new(dir.path()).unwrap();
        blog.export(PageQuery::all(), None).unwrap();

        let json = fs::read_to_string(dir.path().join("public/posts.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let posts = value.as_array().unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["slug"], "two");
        assert_eq!(posts[0]["articleId"], 2);
        assert_eq!(posts[0]["isIndexFile"], false);
        assert_eq!(posts[0]["readingTime"], "1 min read");
        assert_eq!(posts[0]["next"], serde_json::Value::Null);
        assert_eq!(posts[0]["previous"]["slug"], "one");
        assert_eq!(posts[1]["next"]["slug"], "two");
        assert_eq!(posts[1]["preview"]["html"], "<p>Body 1.</p>");
        assert_eq!(posts[1]["series"], "basics");
    }

    #[test]
    fn test_export_page_to_custom_output() {
        let dir = TempDir::new().unwrap();
        for id in 1..=5 {
            write_post(dir.path(), &format!("p{}.md", id), id, "");
        }
        let output = dir.path().join("out/page.json");

        let blog = Blog::new(dir.path()).unwrap();
        blog.export(PageQuery::page(2, 2), Some(&output)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let ids: Vec<i64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["articleId"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
