// Error types for the oai2gemini gateway

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid image reference: {0}")]
    InvalidImage(String),

    #[error("image download failed: {0}")]
    ImageDownload(String),

    /// Non-success upstream response, relayed with its original status and
    /// body instead of being reshaped.
    #[error("upstream returned HTTP {status}")]
    Upstream { status: u16, body: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("internal error: {0}")]
    Internal(String),
}

// Convert GatewayError to HTTP responses for Axum
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        if let GatewayError::Upstream { status, body } = self {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            return (status, [(header::CONTENT_TYPE, "application/json")], body).into_response();
        }

        let status = match &self {
            GatewayError::InvalidRequest(_)
            | GatewayError::InvalidImage(_)
            | GatewayError::ImageDownload(_) => StatusCode::BAD_REQUEST,
            GatewayError::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({
            "error": {
                "message": self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
