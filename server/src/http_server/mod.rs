use axum::response::Response;
use include_dir::{include_dir, Dir};

use errors::ServerError;

pub(crate) mod cmd;
mod config;
pub(crate) mod errors;
pub(crate) mod routes;
mod server;
mod templates;
mod trace;

pub(crate) mod pages {
    pub mod blog;
}

#[cfg(test)]
pub(crate) mod test_helpers;

pub(crate) static STATIC_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

const BLUR_FADE_STYLES: &str = include_str!("../../static/styles/blur-fade.css");
const BLOG_STYLES: &str = include_str!("../../static/styles/blog.css");

type ResponseResult<T = Response> = Result<T, ServerError>;
