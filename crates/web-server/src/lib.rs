use axum::{Router, routing::get};
use configuration::Settings;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// Only immutable settings are shared; each request loads the dataset itself.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
}

/// Builds the application routes.
pub fn router(settings: Settings) -> Router {
    let app_state = Arc::new(AppState { settings });
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::get_page))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/metrics", get(handlers::get_metrics))
        .route("/api/charts", get(handlers::get_charts))
        .with_state(app_state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    // Tracing is initialized by the caller.
    let addr = settings.bind_address();
    tracing::info!(
        dataset = %settings.dataset.path.display(),
        "Web server listening on http://{}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(settings)).await?;

    Ok(())
}
