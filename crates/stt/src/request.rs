use axum::{
    body::Body,
    extract::{FromRequest, Multipart, multipart::MultipartError},
    http::StatusCode,
};

use crate::{
    error::SttError,
    types::{TranscriptionForm, UploadedAudio},
};

/// Body limit for audio uploads (32 MiB)
pub(crate) const BODY_LIMIT_BYTES: usize = 32 << 20;

/// Extractor for the `audio` + `language_code` multipart form
pub struct ExtractMultipart(pub TranscriptionForm);

impl<S> FromRequest<S> for ExtractMultipart
where
    S: Send + Sync,
{
    type Rejection = SttError;

    async fn from_request(request: http::Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = request
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        if !is_multipart {
            return Err(SttError::InvalidRequest(
                "Unsupported Content-Type, expected: 'Content-Type: multipart/form-data'".to_string(),
            ));
        }

        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| SttError::InvalidRequest(format!("Failed to parse multipart form: {e}")))?;

        let mut audio: Option<UploadedAudio> = None;
        let mut language_code: Option<String> = None;

        while let Some(field) = multipart.next_field().await.map_err(|e| field_error("form", &e))? {
            let field_name = field.name().unwrap_or_default().to_string();

            match field_name.as_str() {
                "audio" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(|e| field_error("audio", &e))?;

                    audio = Some(UploadedAudio {
                        bytes: bytes.to_vec(),
                        filename,
                        content_type,
                    });
                }
                "language_code" => {
                    language_code = Some(field.text().await.map_err(|e| field_error("language_code", &e))?);
                }
                _ => {
                    // Skip unknown fields
                }
            }
        }

        let audio = audio.ok_or_else(|| {
            SttError::InvalidRequest("Missing required 'audio' field in multipart form".to_string())
        })?;

        let language_code = language_code.ok_or_else(|| {
            SttError::InvalidRequest("Missing required 'language_code' field in multipart form".to_string())
        })?;

        Ok(Self(TranscriptionForm { audio, language_code }))
    }
}

fn field_error(field: &str, err: &MultipartError) -> SttError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        SttError::PayloadTooLarge(format!("Upload is too large, limit is {BODY_LIMIT_BYTES} bytes"))
    } else {
        SttError::InvalidRequest(format!("Failed to read {field} field: {}", err.body_text()))
    }
}
