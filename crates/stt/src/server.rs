use std::sync::Arc;

use parley_config::{RecognizerConfig, RecognizerType, SttConfig};
use secrecy::SecretString;

use crate::{
    error::SttError,
    intake,
    metadata::read_wav_metadata,
    normalize::{FfmpegTranscoder, Normalizer, TargetFormat, Transcoder},
    provider::{Recognizer, google::GoogleRecognizer},
    types::{AudioContainer, RecognitionRequest, TranscriptionForm, TranscriptionResponse},
};

/// Transcription pipeline shared by all requests
///
/// Holds one recognizer client for the life of the process; each request
/// owns only its temporary files.
pub struct Server {
    normalizer: Normalizer,
    recognizer: Arc<dyn Recognizer>,
}

impl Server {
    pub(crate) fn new(recognizer: Arc<dyn Recognizer>, normalizer: Normalizer) -> Self {
        Self { normalizer, recognizer }
    }

    /// Run one upload through validation, normalization, metadata
    /// extraction, and recognition
    ///
    /// A normalized WAV lives until recognition has finished and is
    /// removed before this returns, whether or not recognition succeeded.
    pub async fn transcribe(&self, form: TranscriptionForm) -> crate::error::Result<TranscriptionResponse> {
        let container = intake::validate(&form)?;
        let TranscriptionForm { audio, language_code } = form;

        tracing::debug!(
            filename = %audio.filename,
            bytes = audio.bytes.len(),
            language = %language_code,
            ?container,
            "accepted upload"
        );

        let (audio, artifact) = match container {
            AudioContainer::Wav => (audio.bytes, None),
            AudioContainer::Webm => {
                let artifact = self.normalizer.normalize(&audio.bytes, container).await?;

                let bytes = tokio::fs::read(artifact.path()).await.map_err(|e| {
                    tracing::error!("Failed to read normalized audio at {}: {e}", artifact.path().display());
                    SttError::Transcode(format!("failed to read normalized audio: {e}"))
                })?;

                tracing::debug!(target_format = ?self.normalizer.target(), "normalized upload");

                (bytes, Some(artifact))
            }
        };

        let metadata = read_wav_metadata(&audio)?;

        let request = RecognitionRequest {
            audio,
            sample_rate_hz: metadata.sample_rate,
            channels: metadata.channels,
            language_code,
        };

        let outcome = self.recognizer.recognize(request).await;
        if let Some(artifact) = artifact {
            artifact.remove().await;
        }
        let segments = outcome?;

        tracing::debug!(
            provider = self.recognizer.name(),
            segments = segments.len(),
            "recognition complete"
        );

        Ok(TranscriptionResponse::from_segments(&segments))
    }
}

/// Builder for constructing the STT server from configuration
pub struct SttServerBuilder<'a> {
    config: &'a SttConfig,
}

impl<'a> SttServerBuilder<'a> {
    pub const fn new(config: &'a SttConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let recognizer_config = &self.config.recognizer;

        tracing::debug!("Initializing recognizer: {:?}", recognizer_config.provider_type);

        let recognizer: Arc<dyn Recognizer> = match recognizer_config.provider_type {
            RecognizerType::Google => {
                let api_key = resolve_api_key(recognizer_config)?;

                Arc::new(
                    GoogleRecognizer::new(api_key, recognizer_config.base_url.clone())
                        .with_model(recognizer_config.model.clone())
                        .with_automatic_punctuation(recognizer_config.enable_automatic_punctuation),
                )
            }
        };

        let transcoder_config = &self.config.transcoder;
        let transcoder: Arc<dyn Transcoder> = Arc::new(FfmpegTranscoder::new(transcoder_config.binary.clone()));
        let target = TargetFormat {
            sample_rate: transcoder_config.sample_rate,
            channels: transcoder_config.channels,
        };

        let normalizer = Normalizer::new(transcoder, target, transcoder_config.temp_dir());

        tracing::debug!(
            transcoder = %transcoder_config.binary.display(),
            temp_dir = %transcoder_config.temp_dir().display(),
            "STT server initialized"
        );

        Ok(Server::new(recognizer, normalizer))
    }
}

fn resolve_api_key(config: &RecognizerConfig) -> crate::error::Result<SecretString> {
    config
        .api_key
        .clone()
        .ok_or_else(|| SttError::ConfigError("API key required for the speech recognizer".to_string()))
}
