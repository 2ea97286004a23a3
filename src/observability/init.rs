//! Tracing initialization and subscriber setup.

use super::exporter;
use super::file_writer::RotationPolicy;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Where spans will be written for this configuration.
#[must_use]
pub fn trace_file_path(config: &Config) -> PathBuf {
    config
        .trace_file
        .as_deref()
        .map_or_else(paths::default_trace_file, paths::expand_tilde)
}

/// Installs the global subscriber exporting spans to the trace file.
///
/// Returns `false` without installing anything if the trace directory cannot
/// be created, since tracing is optional. Only the first successful call in a
/// process takes effect.
///
/// # Example
///
/// ```rust,no_run
/// use bucket_list::observability::init_tracing;
/// use bucket_list::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let trace_file = trace_file_path(config);

    if let Some(dir) = trace_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        if std::fs::create_dir_all(dir).is_err() {
            return false;
        }
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", exporter::SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::file_tracer_provider(trace_file, RotationPolicy::default(), resource);
    let tracer = provider.tracer(exporter::SCOPE_NAME);

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init()
        .is_ok()
}
