use axum::body::Body;
use serde::de::DeserializeOwned;

use crate::error::TranslateError;

/// Extractor for JSON request bodies
pub struct ExtractPayload<T>(pub T);

/// Body limit for translation requests (1 MiB)
pub(crate) const BODY_LIMIT_BYTES: usize = 1 << 20;

fn is_json(value: &http::HeaderValue) -> bool {
    value
        .to_str()
        .ok()
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

impl<S, T: DeserializeOwned> axum::extract::FromRequest<S> for ExtractPayload<T>
where
    S: Send + Sync,
{
    type Rejection = TranslateError;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        if !parts.headers.get(http::header::CONTENT_TYPE).is_some_and(is_json) {
            return Err(TranslateError::UnsupportedMediaType(
                "Unsupported Content-Type, expected: 'Content-Type: application/json'".to_string(),
            ));
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                TranslateError::PayloadTooLarge(format!("Request body is too large, limit is {BODY_LIMIT_BYTES} bytes"))
            } else {
                TranslateError::InvalidRequest(format!("Failed to read request body: {err}"))
            }
        })?;

        let body = serde_json::from_slice::<T>(&bytes)
            .map_err(|e| TranslateError::InvalidRequest(format!("Failed to parse request body: {e}")))?;

        Ok(Self(body))
    }
}
