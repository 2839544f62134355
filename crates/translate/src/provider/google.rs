use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{error::TranslateError, http_client::http_client};

use super::Translator;

const DEFAULT_TRANSLATE_API_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Google Cloud Translation v2 (basic) provider
pub(crate) struct GoogleTranslator {
    client: Client,
    url: String,
    api_key: SecretString,
}

impl GoogleTranslator {
    pub fn new(api_key: SecretString, base_url: Option<String>) -> Self {
        let url = base_url.unwrap_or_else(|| DEFAULT_TRANSLATE_API_URL.to_string());

        Self {
            client: http_client(),
            url: url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    format: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslationsData,
}

#[derive(Deserialize)]
struct TranslationsData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> crate::error::Result<String> {
        let body = TranslateBody {
            q: text,
            target,
            source,
            format: "text",
        };

        tracing::debug!(
            "Google translate request: {} chars, source={}, target={target}",
            text.chars().count(),
            source.unwrap_or("auto"),
        );

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Google translate request failed: {e}");
                TranslateError::Translation(format!("failed to send request to Google translate: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Google translate API error ({status}): {error_text}");

            return Err(TranslateError::Translation(format!("{status}: {error_text}")));
        }

        let result: TranslateResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Google translate response: {e}");
            TranslateError::Translation(format!("malformed response: {e}"))
        })?;

        let translation = result.data.translations.into_iter().next().ok_or_else(|| {
            tracing::error!("Google translate returned no translations");
            TranslateError::Translation("empty translations list".to_string())
        })?;

        if let Some(detected) = &translation.detected_source_language {
            tracing::debug!("Google translate detected source language {detected}");
        }

        Ok(translation.translated_text)
    }

    fn name(&self) -> &str {
        "google"
    }
}
