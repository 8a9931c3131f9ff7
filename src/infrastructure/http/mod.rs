pub mod request_id;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    audiobook::AudiobookController,
    health::{self, ProviderInfo},
    page,
};
use crate::infrastructure::config::Config;

/// Build the application router with all routes configured
pub fn build_router(
    audiobook_controller: Arc<AudiobookController>,
    providers: Arc<ProviderInfo>,
    max_upload_bytes: usize,
) -> Router {
    // Audiobook routes (accept PDF uploads up to the configured size)
    let audiobook_routes = Router::new()
        .route("/api/languages", get(AudiobookController::list_languages))
        .route(
            "/api/documents/inspect",
            post(AudiobookController::inspect_document),
        )
        .route("/api/audiobooks", post(AudiobookController::generate))
        .with_state(audiobook_controller)
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    Router::new()
        .route("/", get(page::index))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(providers)
        .merge(audiobook_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server and serve until Ctrl+C
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
