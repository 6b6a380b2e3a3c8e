use std::{path::PathBuf, sync::Arc};

use color_eyre::eyre::Context;
use posts::blog::BlogPosts;
use tracing::instrument;
use url::Url;

use crate::fetcher::{ContentDir, PostFetcher, StaticPosts};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub port: u16,
    pub blog_content_dir: Option<PathBuf>,
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env() -> crate::Result<Self> {
        let base_url = std::env::var("APP_BASE_URL")
            .wrap_err("Missing APP_BASE_URL, needed for app launch")?;
        let base_url = Url::parse(&base_url).wrap_err("Invalid APP_BASE_URL not parsable")?;

        let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port: u16 = port.parse().wrap_err("PORT must be a valid port number")?;

        Ok(Self {
            base_url,
            port,
            blog_content_dir: std::env::var("BLOG_CONTENT_DIR").ok().map(PathBuf::from),
        })
    }

    pub fn app_url(&self, path: &str) -> String {
        let mut url = self.base_url.clone();

        url.set_path(path);

        url.into()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub app: AppConfig,
    pub fetcher: Arc<dyn PostFetcher>,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> crate::Result<Self> {
        let app = AppConfig::from_env()?;

        let fetcher: Arc<dyn PostFetcher> = if let Some(dir) = &app.blog_content_dir {
            tracing::info!(dir = %dir.display(), "Reading blog posts from disk on every request");

            Arc::new(ContentDir::new(dir.clone()))
        } else {
            let blog_posts = BlogPosts::from_static_dir()?;
            blog_posts.ensure_unique_slugs()?;
            tracing::info!(count = blog_posts.posts().len(), "Serving embedded blog posts");

            Arc::new(StaticPosts::new(blog_posts))
        };

        Ok(AppState { app, fetcher })
    }
}
