//! Configuration loading and constants.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then the `PORT` environment variable. `AppConfig` is the root configuration
//! struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Static assets (HTML, CSS, JS). Filenames are not fingerprinted, so keep it short.
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 300;

pub const CACHE_CONTROL_STATIC: &str = formatcp!("public, max-age={}", HTTP_CACHE_STATIC_MAX_AGE);

/// Health and stats responses must always be fresh
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Service Identity
// =============================================================================

/// Human-readable service name reported by the health probe
pub const SERVICE_NAME: &str = "Therapist Search Frontend";

/// Version reported by the health probe
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backend Defaults
// =============================================================================

/// Production search API that the frontend script talks to
pub const DEFAULT_BACKEND_BASE_URL: &str = "https://therapistsearch-production.up.railway.app";

/// Timeout for the outbound stats call
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Index name reported when the backend does not name one
pub const DEFAULT_INDEX_NAME: &str = "therapist-search";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Directory for static files
pub const STATIC_DIR: &str = "static";

/// Default listen address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port when neither the config file nor `PORT` sets one
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Seconds to wait for in-flight requests on shutdown
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

/// Environment variable that overrides the listen port
pub const PORT_ENV_VAR: &str = "PORT";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "therapist_frontend=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Remote search backend
    #[serde(default)]
    pub backend: BackendConfig,
    /// Static asset location
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}

/// Remote backend whose health payload feeds `/api/stats`
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "BackendConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "BackendConfig::default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "BackendConfig::default_index_name")]
    pub fallback_index_name: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_seconds: Self::default_timeout(),
            fallback_index_name: Self::default_index_name(),
        }
    }
}

impl BackendConfig {
    fn default_base_url() -> String {
        DEFAULT_BACKEND_BASE_URL.to_string()
    }

    fn default_timeout() -> u64 {
        DEFAULT_BACKEND_TIMEOUT_SECS
    }

    fn default_index_name() -> String {
        DEFAULT_INDEX_NAME.to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "AssetsConfig::default_dir")]
    pub dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
        }
    }
}

impl AssetsConfig {
    fn default_dir() -> String {
        STATIC_DIR.to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, applying the `PORT` override.
    ///
    /// When `required` is false and the file does not exist, built-in defaults
    /// are used instead. This is the case for the default config path.
    pub fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Self, ConfigError> {
        Self::load_with_port(path, required, std::env::var(PORT_ENV_VAR).ok().as_deref())
    }

    /// Same as [`AppConfig::load`], with the `PORT` value passed in explicitly.
    pub fn load_with_port<P: AsRef<Path>>(
        path: P,
        required: bool,
        port: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if !required && !path.exists() {
            AppConfig::default()
        } else {
            Self::from_toml(&std::fs::read_to_string(path)?)?
        };

        config.apply_port_override(port)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text without environment overrides.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Override the listen port from the value of the `PORT` variable, if set.
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = port {
            self.http.port = raw.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("{} must be a port number, got '{}'", PORT_ENV_VAR, raw))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "backend.base_url must not be empty".to_string(),
            ));
        }
        if self.backend.timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "backend.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.backend.base_url, DEFAULT_BACKEND_BASE_URL);
        assert_eq!(config.backend.timeout(), Duration::from_secs(10));
        assert_eq!(config.backend.fallback_index_name, "therapist-search");
        assert_eq!(config.assets.dir, "static");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [http]
            port = 9000

            [backend]
            base_url = "http://localhost:8080"
            "#,
        )
        .unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.backend.base_url, "http://localhost:8080");
        assert_eq!(config.backend.timeout_seconds, 10);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config =
            AppConfig::from_toml("[database]\nurl = \"x\"\n\n[backend]\nretries = 3\n").unwrap();
        assert_eq!(config.backend.timeout_seconds, 10);
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();
        config.apply_port_override(Some("4321")).unwrap();
        assert_eq!(config.http.port, 4321);

        config.apply_port_override(None).unwrap();
        assert_eq!(config.http.port, 4321);
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = AppConfig::default();
        let result = config.apply_port_override(Some("eighty"));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.backend.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_log_format() {
        let config = AppConfig::from_toml("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_optional_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = AppConfig::load_with_port(&path, false, None).unwrap();
        assert_eq!(config.backend.base_url, DEFAULT_BACKEND_BASE_URL);
        assert_eq!(config.http.port, 8000);
    }

    #[test]
    fn test_port_value_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frontend.toml");
        std::fs::write(&path, "[http]\nport = 9000\n").unwrap();

        let config = AppConfig::load_with_port(&path, true, Some("8123")).unwrap();
        assert_eq!(config.http.port, 8123);

        let config = AppConfig::load_with_port(&path, true, None).unwrap();
        assert_eq!(config.http.port, 9000);
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load_with_port(&path, true, None),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_cache_control_static_value() {
        assert_eq!(CACHE_CONTROL_STATIC, "public, max-age=300");
    }
}
