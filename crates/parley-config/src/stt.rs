use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;

/// Speech-to-text pipeline configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// Remote recognition service
    pub recognizer: RecognizerConfig,
    /// External transcoder used to normalize streaming containers
    #[serde(default)]
    pub transcoder: TranscoderConfig,
}

/// Configuration for the remote recognition service
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecognizerConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: RecognizerType,
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Provider-specific recognition model (e.g. `latest_short`)
    #[serde(default)]
    pub model: Option<String>,
    /// Ask the provider to insert punctuation
    #[serde(default)]
    pub enable_automatic_punctuation: bool,
}

/// Supported recognition providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognizerType {
    /// Google Cloud Speech-to-Text v1
    Google,
}

/// External transcoder settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscoderConfig {
    /// Transcoder executable, resolved through `PATH` when relative
    #[serde(default = "default_binary")]
    pub binary: PathBuf,
    /// Output sample rate in hertz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Output channel count
    #[serde(default = "default_channels")]
    pub channels: u16,
    /// Directory for request-scoped temporary files
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            temp_dir: None,
        }
    }
}

impl TranscoderConfig {
    /// Directory for temporary files, falling back to the system default
    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

fn default_binary() -> PathBuf {
    PathBuf::from("ffmpeg")
}

#[allow(clippy::missing_const_for_fn)]
fn default_sample_rate() -> u32 {
    16_000
}

#[allow(clippy::missing_const_for_fn)]
fn default_channels() -> u16 {
    1
}
