pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use config::Config;
use routes::{analyze_handler, health_handler, method_not_allowed_handler};
use services::AnalyzerService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub analyzer: Arc<AnalyzerService>,
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/analyze",
            post(analyze_handler).fallback(method_not_allowed_handler),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
