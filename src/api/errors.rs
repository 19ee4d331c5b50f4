use axum::{http::StatusCode, response::IntoResponse, Json};
use crate::errors::ShaderGenError;
use super::models::{ErrorResponse, GENERATION_FAILED};

impl IntoResponse for ShaderGenError {
    fn into_response(self) -> axum::response::Response {
        // A missing key is reported as a server fault too, not 503.
        let body = if self.is_generation_failure() {
            ErrorResponse::with_details(GENERATION_FAILED, self.to_string())
        } else {
            ErrorResponse::new(self.to_string())
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failures_are_500() {
        let errors = [
            ShaderGenError::Config("GROQ_API_KEY is not set".into()),
            ShaderGenError::Upstream { status: 503, body: "busy".into() },
            ShaderGenError::Transport("connection refused".into()),
            ShaderGenError::Internal("boom".into()),
        ];
        for err in errors {
            assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
