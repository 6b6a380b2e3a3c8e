use color_eyre::eyre::Context;
use tracing::info;

use crate::{
    http_server::{routes, server::run_server},
    AppState, Result,
};

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env()?;
    let port = app_state.app.port;

    info!("Spawning Tasks");
    let server = tokio::spawn(run_server(
        routes::make_router().with_state(app_state),
        port,
    ));
    info!("Tasks Spawned");

    server.await.wrap_err("Server task panicked")??;

    info!("Main Returning");

    Ok(())
}
