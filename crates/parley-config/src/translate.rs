use secrecy::SecretString;
use serde::Deserialize;

/// Translation configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslateConfig {
    /// Remote translation service
    pub provider: TranslateProviderConfig,
}

/// Configuration for the remote translation service
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslateProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: TranslateProviderType,
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Supported translation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslateProviderType {
    /// Google Cloud Translation v2
    Google,
}
