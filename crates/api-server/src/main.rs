use api_server::{build_router, AppState};
use application::CampusApp;
use config::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("api_server=debug,tower_http=debug")),
        )
        .init();

    info!("Starting campus API server");

    // Load configuration from environment
    let config = Config::from_env(None)?;

    info!(database = %config.database_path, "using database");
    info!(registry = %config.registry_data_path.display(), "using registry data");

    let campus_app = Arc::new(
        CampusApp::new(&config.database_path, &config.registry_data_path).await?,
    );
    let app = build_router(AppState::new(campus_app.clone()));

    // Run the server
    let bind_address = config.api_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("API server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if config.registry_persist_on_shutdown {
        if let Err(e) = campus_app.persist_registry(&config.registry_data_path).await {
            error!(error = %e, "failed to save registry data");
        }
    }

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for ctrl-c");
    }
    info!("shutdown requested");
}
