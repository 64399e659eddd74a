//! Products API - REST server for the product catalog

use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        environment = ?config.environment,
        "Starting {} v{}", config.app.name, config.app.version
    );

    // Connect to PostgreSQL (retries while the database comes up)
    let db = connect_from_config_with_retry(config.database.clone(), None).await?;

    run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState {
        config: config.clone(),
        db: db.clone(),
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let app = create_router::<openapi::ApiDoc>(api_routes)?;

    info!("Starting Products API on port {}", config.server.port);

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL connections");
        match db.close().await {
            Ok(()) => info!("PostgreSQL connection pool closed"),
            Err(e) => warn!("Failed to close PostgreSQL pool: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
