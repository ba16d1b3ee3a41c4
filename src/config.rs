//! Configuration module
//!
//! Reads a TOML file (default `~/.config/seatwise/config.toml`, overridable
//! with `SEATWISE_CONFIG`). Every section has defaults so a missing file
//! still yields a runnable development setup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::services::payment::DEFAULT_PAID_STATUSES;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://seatwise.db?mode=rwc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSection {
    pub api_base: String,
    pub api_key: String,
    pub callback_url: String,
    /// Provider statuses recognized as "paid", matched case-sensitively.
    /// The provider's vocabulary is not authoritatively documented, hence
    /// the override.
    pub paid_statuses: Vec<String>,
}

impl Default for PaymentSection {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            api_key: String::new(),
            callback_url: String::new(),
            paid_statuses: DEFAULT_PAID_STATUSES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsSection {
    pub api_base: String,
    pub api_key: String,
    pub sender_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub payment: PaymentSection,
    pub sms: SmsSection,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Default config file location
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("seatwise")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_runnable() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.database.url.starts_with("sqlite://"));
        assert_eq!(cfg.payment.paid_statuses.len(), 5);
        assert!(cfg.payment.paid_statuses.iter().any(|s| s == "PAID"));
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [payment]
            api_base = "https://checkout.example.com/api"
            api_key = "k"
            paid_statuses = ["Success", "OK"]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.payment.paid_statuses, vec!["Success", "OK"]);
        assert_eq!(cfg.logging.level, "info");
    }
}
