use axum::http::StatusCode;

/// Liveness probe. Never touches the completion API.
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
