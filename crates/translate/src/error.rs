use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use parley_core::{HttpError, LanguageCodeError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranslateError>;

/// Translation service errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Request failed field validation; the message is shown as-is
    #[error("{0}")]
    InvalidRequest(String),

    /// Request body is not JSON
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Request body exceeded the limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// The remote translation call failed; detail is for logs only
    #[error("Translation failed: {0}")]
    Translation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<LanguageCodeError> for TranslateError {
    fn from(err: LanguageCodeError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl HttpError for TranslateError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::Translation(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) | Self::UnsupportedMediaType(_) | Self::PayloadTooLarge(_) => {
                "invalid_request_error"
            }
            Self::Translation(_) => "api_error",
            Self::ConfigError(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Translation(_) => "Error translating text.".to_string(),
            Self::ConfigError(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.error_body())).into_response()
    }
}
