use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if no feature is configured or a section holds
    /// values that cannot work at runtime
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_has_features()?;
        self.validate_server_config()?;
        self.validate_stt_config()?;
        self.validate_telemetry_config()?;
        Ok(())
    }

    /// Ensure at least one endpoint has a provider behind it
    fn validate_has_features(&self) -> anyhow::Result<()> {
        if self.stt.is_none() && self.translate.is_none() {
            anyhow::bail!("at least one feature must be configured ([stt] or [translate])");
        }

        Ok(())
    }

    fn validate_server_config(&self) -> anyhow::Result<()> {
        let prefix = &self.server.path_prefix;

        if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
            anyhow::bail!("server.path_prefix must start with '/' and must not end with '/': `{prefix}`");
        }

        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        if let Some(ref cors) = self.server.cors
            && cors.credentials
            && [&cors.origins, &cors.methods, &cors.headers]
                .into_iter()
                .any(|value| *value == crate::AnyOrList::Any)
        {
            anyhow::bail!("server.cors.credentials cannot be combined with wildcard origins, methods, or headers");
        }

        Ok(())
    }

    fn validate_stt_config(&self) -> anyhow::Result<()> {
        let Some(ref stt) = self.stt else {
            return Ok(());
        };

        if stt.transcoder.sample_rate == 0 {
            anyhow::bail!("stt.transcoder.sample_rate must be greater than 0");
        }

        if stt.transcoder.channels == 0 {
            anyhow::bail!("stt.transcoder.channels must be greater than 0");
        }

        Ok(())
    }

    fn validate_telemetry_config(&self) -> anyhow::Result<()> {
        let Some(ref telemetry) = self.telemetry else {
            return Ok(());
        };

        if !(0.0..=1.0).contains(&telemetry.tracing.sampling_rate) {
            anyhow::bail!("telemetry.tracing.sampling_rate must be between 0.0 and 1.0");
        }

        Ok(())
    }
}
