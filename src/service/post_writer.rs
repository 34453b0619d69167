use std::path::Path;

use anyhow::Context;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::constants;
use crate::model::data::chan::PagePosts;

/// Appends one page worth of posts to `path`. The file and its parent directory are created when
/// missing, existing content is never touched.
pub async fn append_page_posts(path: &Path, page_posts: &PagePosts) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).await?;
        }
    }

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| {
            return format!("append_page_posts() Failed to open \'{}\'", path.display());
        })?;

    let formatted = format_page_posts(page_posts);

    file.write_all(formatted.as_bytes())
        .await
        .with_context(|| {
            return format!("append_page_posts() Failed to write into \'{}\'", path.display());
        })?;

    file.flush().await?;

    info!(
        "append_page_posts() saved page {} ({} posts) to \'{}\'",
        page_posts.page,
        page_posts.posts.len(),
        path.display()
    );

    return Ok(());
}

pub fn format_page_posts(page_posts: &PagePosts) -> String {
    let mut result = format!("Page {}    Poster {}\n\n\n", page_posts.page, page_posts.poster_id);

    if page_posts.is_empty() {
        result.push_str(constants::NO_POST_MARKER);
        result.push('\n');
        return result;
    }

    let divider = "-".repeat(constants::POST_DIVIDER_WIDTH);

    for post in &page_posts.posts {
        result.push_str(&format!("Post {}:\n{}\n{}\n", post.index, post.content, divider));
    }

    return result;
}

async fn ensure_directory(directory: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(directory)
        .await
        .with_context(|| {
            return format!("ensure_directory() Failed to create \'{}\'", directory.display());
        })?;

    return Ok(());
}

#[test]
fn test_format_empty_page() {
    let formatted = format_page_posts(&PagePosts::empty(3, "X"));
    assert_eq!("Page 3    Poster X\n\n\nNo post\n", formatted);
}

#[test]
fn test_format_page_with_posts() {
    use crate::model::data::chan::UserPost;

    let page_posts = PagePosts {
        page: 2,
        poster_id: "abc".to_string(),
        posts: vec![
            UserPost { page: 2, index: 1, content: "hello".to_string() },
            UserPost { page: 2, index: 2, content: "world".to_string() },
        ]
    };

    let divider = "-".repeat(80);
    let expected = format!(
        "Page 2    Poster abc\n\n\nPost 1:\nhello\n{}\nPost 2:\nworld\n{}\n",
        divider,
        divider
    );

    assert_eq!(expected, format_page_posts(&page_posts));
}
