use std::net::SocketAddr;

use axum::Router;
use color_eyre::eyre::Context;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{http_server::trace::RequestSpans, Result};

pub(crate) async fn run_server(routes: Router, port: u16) -> Result<()> {
    let spans = RequestSpans;
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(spans)
        .on_response(spans);

    let app = routes.layer(trace_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err("Failed to open port")?;

    let addr = listener.local_addr()?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .wrap_err("Failed to run server")
}
