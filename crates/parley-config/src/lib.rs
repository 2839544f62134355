#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod stt;
pub mod telemetry;
pub mod translate;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use server::*;
pub use stt::*;
pub use telemetry::TelemetryConfig;
pub use translate::*;

/// Top-level Parley configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech-to-text pipeline configuration
    #[serde(default)]
    pub stt: Option<SttConfig>,
    /// Translation provider configuration
    #[serde(default)]
    pub translate: Option<TranslateConfig>,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
