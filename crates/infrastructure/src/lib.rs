//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and loads the
//! process-wide configuration and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, Environment, ServerConfig, TelegramConfig};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
