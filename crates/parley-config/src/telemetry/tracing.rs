use serde::Deserialize;

/// Span sampling configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TracingConfig {
    /// Sampling rate (0.0 to 1.0)
    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: f64,
    /// Follow the sampling decision of an incoming parent span
    #[serde(default = "default_true")]
    pub parent_based: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            sampling_rate: default_sampling_rate(),
            parent_based: default_true(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_sampling_rate() -> f64 {
    1.0
}

#[allow(clippy::missing_const_for_fn)]
fn default_true() -> bool {
    true
}
