//! Telemetry for Parley
//!
//! Structured logging through `tracing`, with optional OTLP trace export

mod metadata;

use opentelemetry::global;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{Sampler, SdkTracerProvider};
use parley_config::{
    TelemetryConfig,
    telemetry::{
        exporters::{ExportProtocol, ExporterConfig},
        tracing::TracingConfig,
    },
};

/// Guard that flushes and shuts down trace export on drop
pub struct TelemetryGuard {
    tracer_provider: Option<SdkTracerProvider>,
}

impl TelemetryGuard {
    /// Whether spans are being exported over OTLP
    pub const fn is_exporting(&self) -> bool {
        self.tracer_provider.is_some()
    }

    /// Force flush all pending spans immediately
    ///
    /// # Errors
    ///
    /// Returns an error if the tracer provider fails to flush
    pub fn force_flush(&self) -> anyhow::Result<()> {
        if let Some(ref provider) = self.tracer_provider {
            provider
                .force_flush()
                .map_err(|e| anyhow::anyhow!("failed to flush spans: {e}"))?;
        }
        Ok(())
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.tracer_provider.take()
            && let Err(e) = provider.shutdown()
        {
            eprintln!("failed to shutdown tracer provider: {e}");
        }
    }
}

/// Initialize telemetry from configuration
///
/// Installs the global `tracing` subscriber: an `EnvFilter` built from
/// `log_filter`, a fmt layer, and an OpenTelemetry layer when an exporter
/// is configured. The returned guard must be held for the lifetime of the
/// application.
///
/// # Errors
///
/// Returns an error if the OTLP exporter cannot be built
pub fn init(config: Option<&TelemetryConfig>, log_filter: &str) -> anyhow::Result<TelemetryGuard> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let mut guard = TelemetryGuard { tracer_provider: None };

    match config {
        Some(telemetry_config) if telemetry_config.exporter.is_some() => {
            let tracer_provider = init_tracer(telemetry_config)?;
            let tracer = tracer_provider.tracer("parley");
            let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);
            global::set_tracer_provider(tracer_provider.clone());
            guard.tracer_provider = Some(tracer_provider);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .with(otel_layer)
                .init();
        }
        _ => {
            tracing_subscriber::registry().with(filter).with(fmt_layer).init();
        }
    }

    Ok(guard)
}

/// Initialize OTLP trace export
fn init_tracer(config: &TelemetryConfig) -> anyhow::Result<SdkTracerProvider> {
    let exporter_config = config
        .exporter
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no trace exporter configured"))?;

    let exporter = build_span_exporter(exporter_config)?;

    let provider = SdkTracerProvider::builder()
        .with_resource(metadata::build_resource(config))
        .with_sampler(sampler(&config.tracing))
        .with_batch_exporter(exporter)
        .build();

    Ok(provider)
}

fn sampler(config: &TracingConfig) -> Sampler {
    let sampler = if config.sampling_rate >= 1.0 {
        Sampler::AlwaysOn
    } else if config.sampling_rate <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::TraceIdRatioBased(config.sampling_rate)
    };

    if config.parent_based {
        Sampler::ParentBased(Box::new(sampler))
    } else {
        sampler
    }
}

/// Build OTLP span exporter based on protocol
fn build_span_exporter(config: &ExporterConfig) -> anyhow::Result<opentelemetry_otlp::SpanExporter> {
    use opentelemetry_otlp::SpanExporter;

    let exporter = match config.protocol {
        ExportProtocol::Grpc => SpanExporter::builder()
            .with_tonic()
            .with_endpoint(config.endpoint.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build gRPC span exporter: {e}"))?,
        ExportProtocol::HttpProto => SpanExporter::builder()
            .with_http()
            .with_endpoint(config.endpoint.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP span exporter: {e}"))?,
    };

    Ok(exporter)
}
