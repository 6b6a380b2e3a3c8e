use std::sync::Arc;

use axum::extract::State;
use maud::{html, Markup};
use posts::{blog::BlogPost, date::ByRecency};
use tracing::instrument;

use crate::{
    fetcher::PostFetcher,
    http_server::{
        templates::{
            base,
            blur_fade::BlurFade,
            post_templates::{BlogPostList, BLUR_FADE_DELAY},
            PageMetadata,
        },
        ResponseResult,
    },
    AppConfig,
};

const BLOG_TITLE: &str = "Blog";
const BLOG_DESCRIPTION: &str = "My thoughts on software development, life, and more.";

#[instrument(skip_all)]
pub(crate) async fn blog_index(
    State(config): State<AppConfig>,
    State(fetcher): State<Arc<dyn PostFetcher>>,
) -> ResponseResult<Markup> {
    let posts = fetcher.fetch_posts().await?;
    tracing::debug!(count = posts.len(), "Fetched blog posts");

    Ok(blog_page(&config, posts.by_recency()))
}

/// The blog index for `posts`, which are rendered in the order given.
pub(crate) fn blog_page(config: &AppConfig, posts: Vec<&BlogPost>) -> Markup {
    let metadata = PageMetadata {
        title: BLOG_TITLE,
        description: BLOG_DESCRIPTION,
        canonical_url: config.app_url("/blog"),
    };

    base(
        html! {
          section {
            (BlurFade::new(
              html! { h1 class="font-medium text-2xl mb-8 tracking-tighter" { "blogs" } },
              BLUR_FADE_DELAY,
            ))

            (BlogPostList(posts))
          }
        },
        &metadata,
    )
}

#[cfg(test)]
mod test {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use posts::blog::BlogPosts;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        fetcher::StaticPosts,
        http_server::test_helpers::{
            create_test_app, response_body_string, test_config, test_post,
        },
    };

    async fn render_index(posts: Vec<BlogPost>) -> String {
        let app = create_test_app(Arc::new(StaticPosts::new(BlogPosts::new(posts))));

        let response = app
            .oneshot(Request::builder().uri("/blog").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        response_body_string(response).await
    }

    fn position(body: &str, needle: &str) -> usize {
        body.find(needle)
            .unwrap_or_else(|| panic!("{needle} not found in {body}"))
    }

    #[tokio::test]
    async fn test_posts_are_newest_first() {
        let body = render_index(vec![
            test_post("middle", "2023-06-15"),
            test_post("oldest", "2021-01-01"),
            test_post("newest", "2024-10-01"),
        ])
        .await;

        let newest = position(&body, r#"href="/blog/newest""#);
        let middle = position(&body, r#"href="/blog/middle""#);
        let oldest = position(&body, r#"href="/blog/oldest""#);

        assert!(newest < middle);
        assert!(middle < oldest);
    }

    #[tokio::test]
    async fn test_dates_compare_as_dates() {
        let body = render_index(vec![
            test_post("january", "2024-1-5"),
            test_post("october", "2024-10-01"),
        ])
        .await;

        assert!(position(&body, "/blog/october") < position(&body, "/blog/january"));
    }

    #[tokio::test]
    async fn test_same_day_orders_by_time() {
        let body = render_index(vec![
            test_post("morning", "2024-05-01T08:00:00Z"),
            test_post("evening", "2024-05-01T20:00:00Z"),
        ])
        .await;

        assert!(position(&body, "/blog/evening") < position(&body, "/blog/morning"));
    }

    #[tokio::test]
    async fn test_offsets_compare_as_instants() {
        // 01:00 at +05:00 is 20:00 UTC the previous day
        let body = render_index(vec![
            test_post("plus-five", "2024-01-02T01:00:00+05:00"),
            test_post("utc-late", "2024-01-01T22:00:00Z"),
        ])
        .await;

        assert!(position(&body, "/blog/utc-late") < position(&body, "/blog/plus-five"));
        assert!(body.contains("2024-01-02T01:00:00+05:00"));
    }

    #[tokio::test]
    async fn test_same_day_keeps_fetch_order() {
        let body = render_index(vec![
            test_post("a", "2024-01-01"),
            test_post("b", "2024-01-01"),
            test_post("c", "2024-01-01"),
        ])
        .await;

        assert!(position(&body, "/blog/a\"") < position(&body, "/blog/b\""));
        assert!(position(&body, "/blog/b\"") < position(&body, "/blog/c\""));
    }

    #[tokio::test]
    async fn test_single_post() {
        let body = render_index(vec![test_post("only", "2024-01-01")]).await;

        assert!(body.contains(r#"href="/blog/only""#));
        assert!(body.contains(r#"alt="Summary of only""#));
        assert!(body.contains("animation-delay: 0.08s"));
        assert!(!body.contains("animation-delay: 0.13s"));
    }

    #[tokio::test]
    async fn test_no_posts_renders_only_heading() {
        let body = render_index(vec![]).await;

        assert!(body.contains(">blogs</h1>"));
        assert!(body.contains("animation-delay: 0.04s"));
        assert!(!body.contains("href=\"/blog/"));
        assert!(!body.contains("<img"));
    }

    #[test]
    fn test_page_metadata() {
        let body = blog_page(&test_config(), vec![]).into_string();

        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("<title>Blog</title>"));
        assert!(body.contains(
            r#"<meta name="description" content="My thoughts on software development, life, and more.">"#
        ));
        assert!(body.contains(r#"<link rel="canonical" href="http://localhost:3000/blog">"#));
        assert!(body.contains(r#"href="/styles/blur-fade.css""#));
    }

    #[test]
    fn test_heading_fades_in_before_cards() {
        let first = test_post("first", "2024-01-01");
        let body = blog_page(&test_config(), vec![&first]).into_string();

        assert!(position(&body, "animation-delay: 0.04s") < position(&body, "animation-delay: 0.08s"));
    }
}
