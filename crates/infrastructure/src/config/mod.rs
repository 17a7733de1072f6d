//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `telegram`: Bot API credential and endpoint
//!
//! Sources are layered, later ones winning: built-in defaults, an optional
//! `config.toml`, `UCSTORE__*` environment variables and finally
//! `TELEGRAM_BOT_TOKEN`.

mod server;
mod telegram;

use std::fmt;
use std::path::Path;

use integration_telegram::client::DEFAULT_API_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

pub use server::ServerConfig;
pub use telegram::TelegramConfig;

/// Prefix of environment overrides, e.g. `UCSTORE__SERVER__PORT`
pub const ENV_PREFIX: &str = "UCSTORE";

/// Environment variable holding the bot token
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Telegram configuration
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::with_name("config").required(false),
            env_source(),
            std::env::var(BOT_TOKEN_ENV).ok(),
        )
    }

    /// Load configuration from an explicit file, still honoring the environment
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::from(path.as_ref()).required(true),
            env_source(),
            std::env::var(BOT_TOKEN_ENV).ok(),
        )
    }

    fn build(
        file: config::File<config::FileSourceFile, config::FileFormat>,
        env: config::Environment,
        bot_token: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.shutdown_timeout_secs", 30)?
            .set_default("telegram.api_base_url", DEFAULT_API_BASE_URL)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., UCSTORE__SERVER__PORT)
            .add_source(env)
            // The bot token keeps its conventional variable name
            .set_override_option("telegram.bot_token", bot_token)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;
    use crate::telemetry::LogFormat;

    fn no_file() -> config::File<config::FileSourceFile, config::FileFormat> {
        config::File::with_name("this-config-file-does-not-exist").required(false)
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        env_source().source(Some(map))
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::build(no_file(), env(&[]), None).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telegram.api_base_url, "https://api.telegram.org");
        assert!(!config.telegram.is_configured());
        assert_eq!(config.telemetry.log_format, LogFormat::Text);
    }

    #[test]
    fn bot_token_override() {
        let config =
            AppConfig::build(no_file(), env(&[]), Some("123:abc".to_string())).unwrap();
        assert_eq!(config.telegram.bot_token_str(), Some("123:abc"));
    }

    #[test]
    fn empty_bot_token_counts_as_missing() {
        let config = AppConfig::build(no_file(), env(&[]), Some(String::new())).unwrap();
        assert!(!config.telegram.is_configured());
    }

    #[test]
    fn prefixed_environment_overrides() {
        let config = AppConfig::build(
            no_file(),
            env(&[
                ("UCSTORE__SERVER__PORT", "8081"),
                ("UCSTORE__ENVIRONMENT", "production"),
                ("UCSTORE__TELEMETRY__LOG_FORMAT", "json"),
            ]),
            None,
        )
        .unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
    }

    #[test]
    fn file_values_are_loaded() {
        let file = toml_file(
            r#"
            [server]
            port = 9090
            max_body_size_json_bytes = 4096

            [telegram]
            bot_token = "1:from-file"
            api_base_url = "http://localhost:8081"
            "#,
        );

        let config =
            AppConfig::build(config::File::from(file.path()), env(&[]), None).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.max_body_size_json_bytes, 4096);
        assert_eq!(config.telegram.bot_token_str(), Some("1:from-file"));
        assert_eq!(config.telegram.api_base_url, "http://localhost:8081");
    }

    #[test]
    fn token_variable_beats_file_and_prefixed_env() {
        let file = toml_file("[telegram]\nbot_token = \"1:from-file\"\n");

        let config = AppConfig::build(
            config::File::from(file.path()),
            env(&[("UCSTORE__TELEGRAM__BOT_TOKEN", "1:from-prefixed")]),
            Some("1:from-token-var".to_string()),
        )
        .unwrap();

        assert_eq!(config.telegram.bot_token_str(), Some("1:from-token-var"));
    }

    #[test]
    fn environment_beats_file() {
        let file = toml_file("[server]\nport = 9090\n");

        let config = AppConfig::build(
            config::File::from(file.path()),
            env(&[("UCSTORE__SERVER__PORT", "7070")]),
            None,
        )
        .unwrap();

        assert_eq!(config.server.port, 7070);
    }

    #[test]
    fn missing_required_file_is_error() {
        assert!(AppConfig::load_from_file("/nonexistent/ucstore.toml").is_err());
    }

    #[test]
    fn debug_never_shows_token() {
        let config = AppConfig::build(no_file(), env(&[]), Some("1:hidden".to_string())).unwrap();
        assert!(!format!("{config:?}").contains("hidden"));
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let result = AppConfig::build(no_file(), env(&[("UCSTORE__ENVIRONMENT", "staging")]), None);
        assert!(result.is_err());
    }
}
