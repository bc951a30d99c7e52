//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;

use axum::Router;

use docshare_core::config::AppConfig;
use docshare_core::error::AppError;
use docshare_core::traits::MediaStore;
use docshare_database::DatabasePool;
use docshare_storage::LocalMediaStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the DocShare server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    tracing::info!("Starting DocShare server");

    let media = LocalMediaStore::from_config(&config.storage).await?;
    tracing::info!(
        root = %media.root().display(),
        public_base_url = %config.storage.public_base_url,
        "Media store ready"
    );
    let media: Arc<dyn MediaStore> = Arc::new(media);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(AppState::new(config, db.clone(), media));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("DocShare server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
