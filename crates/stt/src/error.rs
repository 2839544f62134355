use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use parley_core::{HttpError, LanguageCodeError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Transcription pipeline errors
///
/// Variants that wrap a detail string keep it for logs only; the caller
/// sees the fixed text from [`HttpError::client_message`].
#[derive(Debug, Error)]
pub enum SttError {
    /// Request failed field validation; the message is shown as-is
    #[error("{0}")]
    InvalidRequest(String),

    /// Upload exceeded the body limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// The upload could not be converted to PCM
    #[error("Failed to process audio: {0}")]
    Transcode(String),

    /// The audio header could not be parsed
    #[error("Invalid audio file: {0}")]
    InvalidAudio(String),

    /// The remote recognition call failed
    #[error("Recognition failed: {0}")]
    Recognition(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<LanguageCodeError> for SttError {
    fn from(err: LanguageCodeError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::Transcode(_) | Self::InvalidAudio(_) | Self::Recognition(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ConfigError(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) | Self::PayloadTooLarge(_) => "invalid_request_error",
            Self::Transcode(_) | Self::InvalidAudio(_) => "invalid_audio_error",
            Self::Recognition(_) => "api_error",
            Self::ConfigError(_) | Self::InternalError(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::InvalidRequest(message) | Self::PayloadTooLarge(message) => message.clone(),
            Self::Transcode(_) => "Failed to process audio.".to_string(),
            Self::InvalidAudio(_) => "Invalid audio file.".to_string(),
            Self::Recognition(_) => "Error transcribing text.".to_string(),
            Self::ConfigError(_) | Self::InternalError(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.error_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_detail_is_not_exposed() {
        let err = SttError::Recognition("quota exceeded for project 1234".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "Error transcribing text.");
    }

    #[test]
    fn processing_errors_are_generic() {
        let transcode = SttError::Transcode("ffmpeg exited with status 1".to_string());
        let header = SttError::InvalidAudio("no RIFF tag found".to_string());

        assert_eq!(transcode.client_message(), "Failed to process audio.");
        assert_eq!(header.client_message(), "Invalid audio file.");
        assert_eq!(header.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn language_errors_become_validation_errors() {
        let err = SttError::from(LanguageCodeError::TooLong);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "Ensure this field has no more than 6 characters.");
    }

    #[test]
    fn internal_errors_hide_detail() {
        let err = SttError::InternalError("task panicked".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Internal server error");
    }
}
