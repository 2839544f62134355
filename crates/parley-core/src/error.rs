use http::StatusCode;
use serde::Serialize;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type, so every endpoint
/// answers failures with the same [`ErrorBody`] shape.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    ///
    /// Never carries upstream provider or filesystem details.
    fn client_message(&self) -> String;

    /// Render the JSON error body
    fn error_body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorDetails {
                message: self.client_message(),
                r#type: self.error_type().to_string(),
                code: self.status_code().as_u16(),
            },
        }
    }
}

/// `{"error": {"message", "type", "code"}}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetails {
    pub message: String,
    pub r#type: String,
    pub code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("upstream said no: quota")]
    struct Upstream;

    impl HttpError for Upstream {
        fn status_code(&self) -> StatusCode {
            StatusCode::BAD_REQUEST
        }

        fn error_type(&self) -> &str {
            "api_error"
        }

        fn client_message(&self) -> String {
            "Something failed.".to_string()
        }
    }

    #[test]
    fn body_uses_client_message() {
        let body = serde_json::to_value(Upstream.error_body()).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "error": { "message": "Something failed.", "type": "api_error", "code": 400 }
            })
        );
    }
}
