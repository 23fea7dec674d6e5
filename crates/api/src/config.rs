//! Application configuration loaded from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8080`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
/// - `METRICS_PORT` — Prometheus exporter port (default: disabled)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub metrics_port: Option<u16>,
}

impl Config {
    /// Loads configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => parse_port("PORT", value)?,
            None => DEFAULT_PORT,
        };
        let metrics_port = lookup("METRICS_PORT")
            .map(|value| parse_port("METRICS_PORT", value))
            .transpose()?;
        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => parse_log_format(value)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
            metrics_port,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the address of the metrics exporter, if one is configured.
    ///
    /// The exporter always listens on all interfaces.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        self.metrics_port
            .map(|port| SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
            metrics_port: None,
        }
    }
}

fn parse_port(name: &'static str, value: String) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}

fn parse_log_format(value: String) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" | "pretty" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::InvalidValue {
            name: "LOG_FORMAT",
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.metrics_port, None);
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr(), Config::default().addr());
        assert_eq!(config.metrics_addr(), None);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
            ("LOG_FORMAT", "JSON"),
            ("METRICS_PORT", "9100"),
        ])
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9000");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.metrics_addr(),
            Some(SocketAddr::from(([0, 0, 0, 0], 9100)))
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_range_metrics_port_is_rejected() {
        let err = load(&[("METRICS_PORT", "70000")]).unwrap_err();
        assert!(err.to_string().contains("METRICS_PORT"));
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        assert!(load(&[("LOG_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:3000");
    }
}
