//! Configuration management for the Quid creator dashboard

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Web server configuration
    pub server: ServerConfig,

    /// Dashboard data source configuration
    pub source: SourceConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Where dashboard data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceMode {
    /// Built-in mock data served after a simulated delay
    #[default]
    Mock,
    /// A remote Quid backend API
    Remote,
}

/// Dashboard data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source selection
    #[serde(default)]
    pub mode: SourceMode,

    /// Simulated network delay for the mock source, in milliseconds
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,

    /// Base URL of the remote backend API
    #[serde(default = "default_remote_base_url")]
    pub remote_base_url: String,

    /// API key sent to the remote backend, if required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout for the remote backend, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(4)
}

const fn default_mock_delay_ms() -> u64 {
    1500
}

fn default_remote_base_url() -> String {
    "http://127.0.0.1:8090".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("QUID").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                workers: default_workers(),
            },
            source: SourceConfig {
                mode: SourceMode::default(),
                mock_delay_ms: default_mock_delay_ms(),
                remote_base_url: default_remote_base_url(),
                api_key: None,
                request_timeout_secs: default_request_timeout_secs(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
#[allow(clippy::unwrap_used, clippy::field_reassign_with_default)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.workers > 0);

        assert_eq!(config.source.mode, SourceMode::Mock);
        assert_eq!(config.source.mock_delay_ms, 1500);
        assert_eq!(config.source.remote_base_url, "http://127.0.0.1:8090");
        assert!(config.source.api_key.is_none());
        assert_eq!(config.source.request_timeout_secs, 30);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_source_mode_serde_names() {
        let mock: SourceMode = serde_json::from_str("\"mock\"").unwrap();
        assert_eq!(mock, SourceMode::Mock);

        let remote: SourceMode = serde_json::from_str("\"remote\"").unwrap();
        assert_eq!(remote, SourceMode::Remote);

        assert_eq!(serde_json::to_string(&SourceMode::Mock).unwrap(), "\"mock\"");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.server.host, config.server.host);
        assert_eq!(deserialized.server.port, config.server.port);
        assert_eq!(deserialized.source.mode, config.source.mode);
        assert_eq!(deserialized.source.mock_delay_ms, config.source.mock_delay_ms);
        assert_eq!(deserialized.logging.level, config.logging.level);
    }

    #[test]
    fn test_api_key_omitted_when_absent() {
        let config = Config::default();
        let serialized = serde_json::to_string(&config).unwrap();

        assert!(!serialized.contains("api_key"));
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{
            "server": {"host": "localhost"},
            "source": {"mode": "remote"},
            "logging": {}
        }"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 8080); // Uses default
        assert_eq!(config.source.mode, SourceMode::Remote);
        assert_eq!(config.source.mock_delay_ms, 1500); // Uses default
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_remote_source_config() {
        let mut config = Config::default();
        config.source.mode = SourceMode::Remote;
        config.source.remote_base_url = "https://api.quid.example".to_string();
        config.source.api_key = Some("test-key".to_string());

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.source.mode, SourceMode::Remote);
        assert_eq!(deserialized.source.remote_base_url, "https://api.quid.example");
        assert_eq!(deserialized.source.api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_config_bounds() {
        let config = Config::default();

        assert!(config.server.port > 0);
        assert!(config.server.workers > 0);
        assert!(config.server.workers < 1000);
        assert!(config.source.request_timeout_secs > 0);
        assert!(!config.logging.level.is_empty());
        assert!(!config.logging.format.is_empty());
    }
}
