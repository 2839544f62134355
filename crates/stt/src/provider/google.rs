use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    error::SttError,
    http_client::http_client,
    types::{Alternative, RecognitionRequest, RecognitionSegment},
};

use super::Recognizer;

const DEFAULT_SPEECH_API_URL: &str = "https://speech.googleapis.com/v1";

/// Google Cloud Speech-to-Text v1 synchronous recognizer
pub(crate) struct GoogleRecognizer {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: Option<String>,
    enable_automatic_punctuation: bool,
}

impl GoogleRecognizer {
    pub fn new(api_key: SecretString, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_SPEECH_API_URL.to_string());

        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: None,
            enable_automatic_punctuation: false,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub const fn with_automatic_punctuation(mut self, enabled: bool) -> Self {
        self.enable_automatic_punctuation = enabled;
        self
    }

    fn body<'a>(&'a self, request: &'a RecognitionRequest) -> RecognizeBody<'a> {
        RecognizeBody {
            config: RecognitionConfig {
                encoding: "LINEAR16",
                sample_rate_hertz: request.sample_rate_hz,
                audio_channel_count: request.channels,
                language_code: &request.language_code,
                model: self.model.as_deref(),
                enable_automatic_punctuation: self.enable_automatic_punctuation,
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(&request.audio),
            },
        }
    }
}

#[derive(Serialize)]
struct RecognizeBody<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    encoding: &'static str,
    sample_rate_hertz: u32,
    audio_channel_count: u16,
    language_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    enable_automatic_punctuation: bool,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

// An empty response body (`{}`) means no speech was found
#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<SpeechResult>,
}

#[derive(Deserialize)]
struct SpeechResult {
    #[serde(default)]
    alternatives: Vec<SpeechAlternative>,
}

#[derive(Deserialize)]
struct SpeechAlternative {
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    confidence: f32,
}

impl From<RecognizeResponse> for Vec<RecognitionSegment> {
    fn from(response: RecognizeResponse) -> Self {
        response
            .results
            .into_iter()
            .map(|result| RecognitionSegment {
                alternatives: result
                    .alternatives
                    .into_iter()
                    .map(|a| Alternative {
                        transcript: a.transcript,
                        confidence: a.confidence,
                    })
                    .collect(),
            })
            .collect()
    }
}

#[async_trait]
impl Recognizer for GoogleRecognizer {
    async fn recognize(&self, request: RecognitionRequest) -> crate::error::Result<Vec<RecognitionSegment>> {
        let url = format!("{}/speech:recognize", self.base_url);

        tracing::debug!(
            "Google speech request: {} bytes, rate={}Hz, language={}",
            request.audio.len(),
            request.sample_rate_hz,
            request.language_code,
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&self.body(&request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Google speech request failed: {e}");
                SttError::Recognition(format!("failed to send request to Google speech: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Google speech API error ({status}): {error_text}");

            return Err(SttError::Recognition(format!("{status}: {error_text}")));
        }

        let result: RecognizeResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Google speech response: {e}");
            SttError::Recognition(format!("malformed response: {e}"))
        })?;

        tracing::debug!("Google speech returned {} segment(s)", result.results.len());

        Ok(result.into())
    }

    fn name(&self) -> &str {
        "google"
    }
}
