//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use parley_config::{
    Config, CorsConfig, HealthConfig, RecognizerConfig, RecognizerType, ServerConfig, SttConfig, TranscoderConfig,
    TranslateConfig, TranslateProviderConfig, TranslateProviderType,
};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Enable transcription against a mock speech backend
    ///
    /// Temporary files go to `temp_dir` so tests can check cleanup.
    pub fn with_stt(mut self, base_url: &str, temp_dir: &Path) -> Self {
        self.config.stt = Some(SttConfig {
            recognizer: RecognizerConfig {
                provider_type: RecognizerType::Google,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.to_owned()),
                model: None,
                enable_automatic_punctuation: false,
            },
            transcoder: TranscoderConfig {
                temp_dir: Some(temp_dir.to_path_buf()),
                ..TranscoderConfig::default()
            },
        });
        self
    }

    /// Replace the transcoder binary
    pub fn with_transcoder(mut self, binary: PathBuf) -> Self {
        if let Some(ref mut stt) = self.config.stt {
            stt.transcoder.binary = binary;
        }
        self
    }

    /// Enable translation against a mock translation backend
    pub fn with_translate(mut self, base_url: &str) -> Self {
        self.config.translate = Some(TranslateConfig {
            provider: TranslateProviderConfig {
                provider_type: TranslateProviderType::Google,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.to_owned()),
            },
        });
        self
    }

    /// Mount feature routes under `prefix`
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        prefix.clone_into(&mut self.config.server.path_prefix);
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
