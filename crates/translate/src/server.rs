use std::sync::Arc;

use parley_config::{TranslateConfig, TranslateProviderType};

use crate::{
    error::TranslateError,
    provider::{Translator, google::GoogleTranslator},
    types::{TranslationRequest, TranslationResponse},
};

/// Translation proxy shared by all requests
pub struct Server {
    translator: Arc<dyn Translator>,
}

impl Server {
    pub(crate) fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Validate a request and forward it to the translation provider
    ///
    /// Fields are trimmed first; the trimmed values are what get validated
    /// and sent.
    pub async fn translate(&self, request: TranslationRequest) -> crate::error::Result<TranslationResponse> {
        let request = request.trimmed();
        request.validate()?;

        let translated_text = self
            .translator
            .translate(
                &request.source_text,
                request.source_language(),
                &request.target_language_code,
            )
            .await?;

        tracing::debug!(provider = self.translator.name(), "translation complete");

        Ok(TranslationResponse { translated_text })
    }
}

/// Builder for constructing the translation server from configuration
pub struct TranslateServerBuilder<'a> {
    config: &'a TranslateConfig,
}

impl<'a> TranslateServerBuilder<'a> {
    pub const fn new(config: &'a TranslateConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let provider_config = &self.config.provider;

        tracing::debug!("Initializing translation provider: {:?}", provider_config.provider_type);

        let translator: Arc<dyn Translator> = match provider_config.provider_type {
            TranslateProviderType::Google => {
                let api_key = provider_config.api_key.clone().ok_or_else(|| {
                    TranslateError::ConfigError("API key required for the translation provider".to_string())
                })?;

                Arc::new(GoogleTranslator::new(api_key, provider_config.base_url.clone()))
            }
        };

        Ok(Server::new(translator))
    }
}
