use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use axum::{body::Body, http::Response, Router};
use color_eyre::eyre::eyre;
use posts::blog::{BlogMetadata, BlogPost};
use url::Url;

use crate::{fetcher::PostFetcher, AppConfig, AppState, Result};

pub fn test_config() -> AppConfig {
    AppConfig {
        base_url: Url::parse("http://localhost:3000").unwrap(),
        port: 3000,
        blog_content_dir: None,
    }
}

pub fn create_test_app(fetcher: Arc<dyn PostFetcher>) -> Router {
    let state = AppState {
        app: test_config(),
        fetcher,
    };

    crate::http_server::routes::make_router().with_state(state)
}

pub fn test_post(slug: &str, published_at: &str) -> BlogPost {
    BlogPost {
        slug: slug.to_string(),
        metadata: BlogMetadata {
            title: format!("Title of {slug}"),
            published_at: published_at.parse().unwrap(),
            summary: format!("Summary of {slug}"),
            image: format!("/static/blog/{slug}.svg"),
        },
        path: PathBuf::from(format!("{slug}.mdx")),
    }
}

#[derive(Debug)]
pub struct FailingFetcher;

#[async_trait]
impl PostFetcher for FailingFetcher {
    async fn fetch_posts(&self) -> Result<Vec<BlogPost>> {
        Err(eyre!("The post store is unreachable"))
    }
}

pub async fn response_body_string(response: Response<Body>) -> String {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(body_bytes.to_vec()).unwrap()
}
