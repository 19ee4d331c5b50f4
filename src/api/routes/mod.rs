pub mod health;
pub mod shader;

use axum::http::StatusCode;

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
