//! Error types for litbot

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for litbot operations
pub type Result<T> = std::result::Result<T, Error>;

/// litbot errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Text could not be decoded under any supported encoding
    #[error("Failed to decode '{filename}': {message}")]
    Decode { filename: String, message: String },

    /// Document container could not be parsed
    #[error("Failed to parse file '{filename}': {message}")]
    FileParse { filename: String, message: String },

    /// A question was submitted before any review was uploaded
    #[error("Please upload a review first")]
    ReviewMissing,

    /// Blank question
    #[error("Question must not be empty")]
    EmptyQuestion,

    /// Malformed upload request
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a decode error
    pub fn decode(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create a file parse error
    pub fn file_parse(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileParse {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error", msg.clone()),
            Error::Decode { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "decode_error", self.to_string()),
            Error::FileParse { .. } => (StatusCode::BAD_REQUEST, "parse_error", self.to_string()),
            Error::ReviewMissing => (StatusCode::CONFLICT, "review_missing", self.to_string()),
            Error::EmptyQuestion => (StatusCode::BAD_REQUEST, "empty_question", self.to_string()),
            Error::InvalidUpload(msg) => (StatusCode::BAD_REQUEST, "invalid_upload", msg.clone()),
            Error::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "io_error",
                err.to_string(),
            ),
            Error::Json(err) => (StatusCode::BAD_REQUEST, "json_error", err.to_string()),
            Error::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
