pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod seed;
pub mod swagger;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;


use axum::{
    http::{HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::warn;

use config::Config;
use db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

/// Health check endpoint for monitoring
pub async fn health_check() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(serde_json::json!({"status": "ok"})))
}

/// CORS policy allowing only the configured origins.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Assemble the full HTTP surface around an already-connected state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let config = &state.config;

    Router::new()
        .route("/api/health", get(health_check))
        .nest("/api/cohorts", routes::cohorts::router())
        .nest("/api/students", routes::students::router())
        .route_service("/docs", ServeFile::new(&config.docs_page_path))
        .merge(swagger::create_swagger_router())
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone())
}
