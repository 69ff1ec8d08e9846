use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Failures surfaced at the HTTP boundary.
#[derive(Debug)]
pub enum ApiError {
    /// A required field was missing or empty; nothing was processed.
    Validation(String),
    /// The upstream synthesis call failed; nothing was stored.
    Synthesis(anyhow::Error),
}

impl ApiError {
    pub fn missing_field(field: &str) -> Self {
        ApiError::Validation(format!("field '{}' is required", field))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Synthesis(e) => {
                tracing::error!("synthesis request failed: {}", e);
                (StatusCode::BAD_GATEWAY, format!("synthesis failed: {}", e))
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Synthesis(e)
    }
}
