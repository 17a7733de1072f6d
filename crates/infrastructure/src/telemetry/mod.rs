//! Logging and tracing infrastructure
//!
//! Installs the global `tracing` subscriber with console output.

mod subscriber;

pub use subscriber::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
