//! Products API - REST server

use axum_helpers::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use products_api::{app, AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    let router = app(&state);

    info!(
        name = %state.config.app.name,
        version = %state.config.app.version,
        "Starting Products API on port {}",
        state.config.server.port
    );

    create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
