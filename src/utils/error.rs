use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";
pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("No receipt found for id: {id}")]
    NotFound { id: String },

    #[error("Invalid receipt: {message}")]
    InvalidReceipt { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReceiptError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptError::NotFound { .. } => StatusCode::NOT_FOUND,
            ReceiptError::InvalidReceipt { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 回傳給客戶端的訊息，不包含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReceiptError::NotFound { .. } => NOT_FOUND_MESSAGE.to_string(),
            ReceiptError::InvalidReceipt { .. } => INVALID_RECEIPT_MESSAGE.to_string(),
            ReceiptError::ConfigError { .. } | ReceiptError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => "Internal server error.".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status, self);
        }

        let body = ErrorBody {
            message: self.user_friendly_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
