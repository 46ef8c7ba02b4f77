//! Console configuration with file and environment loading.

use std::net::SocketAddr;
use std::path::Path;

use gangway_filter::FilterPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Complete console configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Listen socket configuration.
    pub listen: ListenConfig,
    /// Network-origin filter policy.
    pub filter: FilterPolicy,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            listen: ListenConfig::default(),
            filter: FilterPolicy::default(),
        }
    }
}

/// Where the console listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    /// Bind address.
    pub address: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 4200,
        }
    }
}

impl ConsoleConfig {
    /// Validate configuration.
    ///
    /// The filter policy is deliberately not validated here: a malformed
    /// CIDR entry is logged and skipped at filter construction instead of
    /// blocking startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen.port == 0 {
            return Err(ConfigError::InvalidListen("port cannot be 0".into()));
        }
        if self.http_addr().parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidListen(format!(
                "{} is not a bindable address",
                self.http_addr()
            )));
        }
        Ok(())
    }

    /// The listen address in `address:port` form.
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.listen.address, self.listen.port)
    }

    /// Read configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load configuration from the environment.
    ///
    /// Order: defaults, then the file named by `GANGWAY_CONFIG` (if set),
    /// then single-value overrides `GANGWAY_LISTEN_ADDRESS`,
    /// `GANGWAY_LISTEN_PORT` and `GANGWAY_DISABLE_FILTER`. A file that
    /// cannot be read or parsed is reported and ignored rather than
    /// preventing startup.
    pub fn load() -> Self {
        let mut config = match std::env::var("GANGWAY_CONFIG") {
            Ok(path) => match Self::from_file(&path) {
                Ok(config) => {
                    info!(path = %path, "loaded configuration file");
                    config
                }
                Err(error) => {
                    warn!(%error, path = %path, "ignoring unusable configuration file");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };

        if let Ok(address) = std::env::var("GANGWAY_LISTEN_ADDRESS") {
            config.listen.address = address;
        }
        if let Ok(port) = std::env::var("GANGWAY_LISTEN_PORT") {
            if let Ok(port) = port.parse() {
                config.listen.port = port;
            }
        }
        if let Ok(flag) = std::env::var("GANGWAY_DISABLE_FILTER") {
            if let Ok(flag) = flag.parse() {
                config.filter.disable_filter = flag;
            }
        }

        config
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for this schema.
    #[error("malformed configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The listen address/port pair cannot be bound.
    #[error("invalid listen address: {0}")]
    InvalidListen(String),
}
