use std::time::Duration;

use axum::{
    extract::MatchedPath,
    http::{header, HeaderName, Request, Response, StatusCode},
};
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::{field::Empty, Span};

/// Route label for requests that no route matched, such as 404s from the fallback.
const UNMATCHED_ROUTE: &str = "unmatched";

/// Builds one span per request and records how the request finished.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RequestSpans;

impl<B> MakeSpan<B> for RequestSpans {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            otel.name = span_name(request),
            otel.kind = "server",
            http.route = matched_route(request),
            http.request.method = %request.method(),
            url.path = request.uri().path(),
            url.query = request.uri().query(),
            user_agent.original = header_str(request, &header::USER_AGENT),
            http.request.header.referer = header_str(request, &header::REFERER),
            http.response.status_code = Empty,
            http.response.header.content_type = Empty,
        )
    }
}

impl<B> OnResponse<B> for RequestSpans {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status = response.status();
        let latency_ms = latency.as_millis();

        span.record("http.response.status_code", status.as_u16());
        if let Some(content_type) = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
        {
            span.record("http.response.header.content_type", content_type);
        }

        match Outcome::of(status) {
            Outcome::Failed => {
                tracing::error!(status = status.as_u16(), latency_ms, "Request failed");
            }
            Outcome::Rejected => {
                tracing::debug!(status = status.as_u16(), latency_ms, "Request rejected");
            }
            Outcome::Served => {
                tracing::info!(status = status.as_u16(), latency_ms, "Request served");
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Served,
    Rejected,
    Failed,
}

impl Outcome {
    fn of(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::Failed
        } else if status.is_client_error() {
            Self::Rejected
        } else {
            Self::Served
        }
    }
}

fn matched_route<B>(request: &Request<B>) -> &str {
    request
        .extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_ROUTE, MatchedPath::as_str)
}

/// `GET /blog` for routed requests, `GET unmatched` for everything else.
/// Uses the route template so the name does not grow with every static asset path.
fn span_name<B>(request: &Request<B>) -> String {
    format!("{} {}", request.method(), matched_route(request))
}

fn header_str<'a, B>(request: &'a Request<B>, name: &HeaderName) -> Option<&'a str> {
    request.headers().get(name).and_then(|h| h.to_str().ok())
}
