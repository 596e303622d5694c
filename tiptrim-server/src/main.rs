//! tiptrim-server: barbershop back office service

use tiptrim_server::utils::init_logger;
use tiptrim_server::{AppState, BoxError, Config, DbService, build_router};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_logger(!config.is_development(), config.log_dir.as_deref())?;

    tracing::info!("Starting tiptrim-server (env: {})", config.environment);

    let db = DbService::new(&config.database_url, config.db_max_connections).await?;
    let state = AppState::new(config.clone(), db.clone());
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("tiptrim-server HTTP listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("tiptrim-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
