use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{debug, error};
use crate::api::AppState;
use crate::api::models::{ErrorResponse, GenerateShaderRequest, GenerateShaderResponse, INVALID_PROMPT};

pub async fn generate_shader(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateShaderResponse>, Response> {
    let prompt = extract_prompt(payload).ok_or_else(|| {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(INVALID_PROMPT))).into_response()
    })?;

    let shader_code = state.generator.generate(&prompt).await.map_err(|e| {
        error!(error = %e, "Shader generation failed");
        e.into_response()
    })?;

    Ok(Json(GenerateShaderResponse { shader_code }))
}

/// The prompt must be a non-empty JSON string; anything else is rejected.
fn extract_prompt(payload: Result<Json<Value>, JsonRejection>) -> Option<String> {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Rejected request body");
            return None;
        }
    };

    serde_json::from_value::<GenerateShaderRequest>(body)
        .ok()
        .map(|req| req.prompt)
        .filter(|prompt| !prompt.is_empty())
}
