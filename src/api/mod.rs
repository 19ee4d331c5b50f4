pub mod routes;
pub mod models;
pub mod errors;

use std::sync::Arc;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use crate::config::AppConfig;
use crate::errors::ShaderGenError;
use crate::shader::ShaderGenerator;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ShaderGenerator>,
}

pub fn create_app_state(config: &AppConfig) -> Result<AppState, ShaderGenError> {
    let generator = ShaderGenerator::from_config(config)?;
    Ok(AppState { generator: Arc::new(generator) })
}

pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Wrong methods on known paths fall through to the same 404 as unknown paths.
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route(
            "/api/generate-shader",
            post(routes::shader::generate_shader).fallback(routes::not_found),
        )
        .route(
            "/health",
            get(routes::health::health_check).fallback(routes::not_found),
        )
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
        .with_state(state)
}
