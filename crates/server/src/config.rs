//! Server configuration loaded from `flatstore.toml`.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! server on `0.0.0.0:3000` serving `./data` under `/api`. Command-line
//! flags are applied on top through [`Overrides`].

use flatstore_core::{Error, Result};
use flatstore_executor::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Full server configuration.
///
/// # Example
///
/// ```toml
/// host = "0.0.0.0"
/// port = 3000
/// prefix = "/api"
/// log_level = "info"
///
/// [store]
/// data_dir = "data"
///
/// [store.files]
/// sales = "salesFile.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path prefix every route is mounted under
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Maximum log level: "error", "warn", "info", "debug" or "trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Data files
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            prefix: default_prefix(),
            log_level: default_log_level(),
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Default config file contents, with every option documented.
    pub fn default_toml() -> &'static str {
        r#"# Flatstore server configuration

# Address and port to listen on (PORT in the environment overrides port)
host = "0.0.0.0"
port = 3000

# Path prefix for every route
prefix = "/api"

# Log level: error, warn, info, debug, trace
log_level = "info"

[store]
# Directory holding the JSON files
data_dir = "data"

# Hold an exclusive lock on the data directory while running
lock_data_dir = true

[store.files]
products = "products.json"
categories = "categories.json"
users = "users.json"
orders = "orders.json"
sales = "salesFile.json"
"#
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns an error naming the file if it cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        toml::from_str(&content).map_err(|e| Error::Config {
            reason: format!("Failed to parse config file '{}': {}", path.display(), e),
        })
    }

    /// Load from `path` if given, else start from defaults, then apply `overrides`.
    pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        overrides.apply(&mut config);
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config {
            reason: format!("Failed to render config: {}", e),
        })
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Values given on the command line, each replacing its config field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    /// Replaces `store.data_dir`
    pub data_dir: Option<PathBuf>,
    /// Replaces `host`
    pub host: Option<String>,
    /// Replaces `port`
    pub port: Option<u16>,
    /// Replaces `prefix`
    pub prefix: Option<String>,
    /// Replaces `log_level`
    pub log_level: Option<String>,
}

impl Overrides {
    /// Apply every set value to `config`
    pub fn apply(&self, config: &mut ServerConfig) {
        if let Some(dir) = &self.data_dir {
            config.store.data_dir = dir.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }
}
