// HTTP routes configuration

use super::handlers::{analyze_handler, analyze_url_handler, health_handler, metrics_handler};
use super::middleware::{request_id_layers, track_metrics};
use crate::config::AppConfig;
use crate::error::Result;
use crate::pollinations::PollinationsClient;
use crate::storage::UploadStore;
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Request body cap. The image limit is 20MB; the extra headroom covers
/// multipart framing and the other form fields.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub upstream: Arc<PollinationsClient>,
    pub uploads: Arc<UploadStore>,
}

pub fn create_router(
    config: AppConfig,
    upstream: PollinationsClient,
    uploads: UploadStore,
) -> Result<Router> {
    let static_dir = Path::new(&config.server.static_dir).to_path_buf();

    let state = AppState {
        config,
        upstream: Arc::new(upstream),
        uploads: Arc::new(uploads),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/analyze", post(analyze_handler))
        .route("/analyze-url", post(analyze_url_handler))
        // axum's built-in 2MB extractor limit would reject uploads long
        // before our own size checks run; both limits move to MAX_BODY_BYTES
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(tower_http::limit::RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        // Browser frontends may be served from anywhere
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
