use serde::{Deserialize, Serialize};

pub const INVALID_PROMPT: &str = "Invalid or missing prompt";
pub const GENERATION_FAILED: &str = "Groq API Error";

#[derive(Debug, Deserialize)]
pub struct GenerateShaderRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateShaderResponse {
    pub shader_code: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), details: None }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self { error: error.into(), details: Some(details.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_omits_missing_details() {
        let body = serde_json::to_value(ErrorResponse::new(INVALID_PROMPT)).unwrap();
        assert_eq!(body, json!({"error": "Invalid or missing prompt"}));
    }

    #[test]
    fn test_error_body_with_details() {
        let body = serde_json::to_value(ErrorResponse::with_details(GENERATION_FAILED, "status 503")).unwrap();
        assert_eq!(body, json!({"error": "Groq API Error", "details": "status 503"}));
    }
}
