//! OpenTelemetry-based observability with file-based trace export.
//!
//! Spans created with `tracing` are bridged into OpenTelemetry and written as
//! OTLP-style JSON lines to a rotating file:
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Configuration
//!
//! - `trace_level`: an `EnvFilter` directive, default `"info"`
//! - `trace_file`: output path, default `<data dir>/bucket-list-otlp.json`
//!
//! Files rotate at 10MB and three backups are kept.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: Span exporter and tracer provider
//! - `file_writer`: Rotating line writer

mod exporter;
mod file_writer;
mod init;

pub use file_writer::RotationPolicy;
pub use init::{init_tracing, trace_file_path};
