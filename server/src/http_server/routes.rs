use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use color_eyre::eyre::Context;

use super::{pages, ResponseResult, BLOG_STYLES, BLUR_FADE_STYLES, STATIC_ASSETS};
use crate::AppState;

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::permanent("/blog") }))
        .route("/blog", get(pages::blog::blog_index))
        .route("/styles/blog.css", get(|| async { stylesheet(BLOG_STYLES) }))
        .route("/styles/blur-fade.css", get(|| async { stylesheet(BLUR_FADE_STYLES) }))
        .route("/static/{*path}", get(static_assets))
        .fallback(fallback)
}

fn stylesheet(css: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], css)
}

async fn fallback(uri: Uri) -> Response {
    tracing::debug!(path = uri.path(), "No route matched");

    StatusCode::NOT_FOUND.into_response()
}

async fn static_assets(Path(p): Path<String>) -> ResponseResult {
    let path = p.strip_prefix('/').unwrap_or(&p);
    let path = path.strip_suffix('/').unwrap_or(path);

    let entry = STATIC_ASSETS.get_file(path);

    let Some(entry) = entry else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Static asset {path} not found"),
        )
            .into_response());
    };

    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        mime.to_string()
            .parse()
            .wrap_err("Mime type should be a valid header value")?,
    );

    Ok((headers, entry.contents()).into_response())
}
