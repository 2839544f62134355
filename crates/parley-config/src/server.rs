use std::net::SocketAddr;

use serde::Deserialize;

use crate::{cors::CorsConfig, health::HealthConfig};

/// Port used when no listen address is configured
pub const DEFAULT_PORT: u16 = 8007;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    /// Path prefix for the feature routes (e.g. `/ai`), empty for none
    #[serde(default)]
    pub path_prefix: String,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub cors: Option<CorsConfig>,
}

impl ServerConfig {
    /// Configured listen address, or all interfaces on [`DEFAULT_PORT`]
    pub fn listen_address(&self) -> SocketAddr {
        self.listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))
    }

    /// Join the configured prefix with a route path
    pub fn route(&self, path: &str) -> String {
        format!("{}{path}", self.path_prefix)
    }
}
