use std::{fmt::Debug, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use color_eyre::eyre::Context;
use posts::blog::{BlogPost, BlogPosts};
use tracing::instrument;

use crate::Result;

/// Supplies every blog post, in the order they were loaded.
#[async_trait]
pub(crate) trait PostFetcher: Debug + Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<BlogPost>>;
}

/// Posts loaded once, at startup.
#[derive(Debug, Clone)]
pub(crate) struct StaticPosts(Arc<BlogPosts>);

impl StaticPosts {
    pub(crate) fn new(posts: BlogPosts) -> Self {
        Self(Arc::new(posts))
    }
}

#[async_trait]
impl PostFetcher for StaticPosts {
    #[instrument(skip_all)]
    async fn fetch_posts(&self) -> Result<Vec<BlogPost>> {
        Ok(self.0.posts().clone())
    }
}

/// Posts re-read from a directory on every fetch.
#[derive(Debug, Clone)]
pub(crate) struct ContentDir {
    root: PathBuf,
}

impl ContentDir {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl PostFetcher for ContentDir {
    #[instrument(skip_all)]
    async fn fetch_posts(&self) -> Result<Vec<BlogPost>> {
        tracing::debug!(root = %self.root.display(), "Reading blog posts from disk");

        let root = self.root.clone();

        let posts = tokio::task::spawn_blocking(move || BlogPosts::from_path(&root))
            .await
            .wrap_err("Loading blog posts from disk panicked")??;
        posts
            .ensure_unique_slugs()
            .wrap_err_with(|| format!("Blog posts in {} clash", self.root.display()))?;

        Ok(posts.into_posts())
    }
}

#[cfg(test)]
mod test {
    use posts::blog::ValidationError;

    use super::*;
    use crate::http_server::test_helpers::test_post;

    fn post_file(published_at: &str) -> String {
        format!(
            "---\ntitle: \"A post\"\npublishedAt: \"{published_at}\"\nsummary: \"About things\"\nimage: \"/static/blog/a.svg\"\n---\n\nBody\n"
        )
    }

    #[tokio::test]
    async fn test_static_posts_keep_load_order() {
        let fetcher = StaticPosts::new(BlogPosts::new(vec![
            test_post("older", "2020-01-01"),
            test_post("newer", "2024-01-01"),
        ]));

        let slugs: Vec<_> = fetcher
            .fetch_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();

        assert_eq!(slugs, vec!["older", "newer"]);
    }

    #[tokio::test]
    async fn test_content_dir_sees_new_posts() {
        let root = std::env::temp_dir().join(format!("content-dir-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("first.mdx"), post_file("2024-01-01")).unwrap();

        let fetcher = ContentDir::new(root.clone());
        let before = fetcher.fetch_posts().await.unwrap();

        std::fs::write(root.join("second.md"), post_file("2024-02-01")).unwrap();
        let after = fetcher.fetch_posts().await.unwrap();

        std::fs::remove_dir_all(&root).unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(after[1].slug, "second");
    }

    #[tokio::test]
    async fn test_content_dir_rejects_clashing_slugs() {
        let root = std::env::temp_dir().join(format!("content-dir-clash-{}", std::process::id()));
        std::fs::create_dir_all(root.join("2023")).unwrap();
        std::fs::create_dir_all(root.join("2024")).unwrap();
        std::fs::write(root.join("2023/recap.mdx"), post_file("2023-12-31")).unwrap();
        std::fs::write(root.join("2024/recap.md"), post_file("2024-12-31")).unwrap();

        let result = ContentDir::new(root.clone()).fetch_posts().await;
        std::fs::remove_dir_all(&root).unwrap();

        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::DuplicateSlug("recap".to_string()))
        );
    }

    #[tokio::test]
    async fn test_content_dir_missing_is_an_error() {
        let fetcher = ContentDir::new(PathBuf::from("/definitely/not/a/blog/dir"));

        assert!(fetcher.fetch_posts().await.is_err());
    }
}
