//! Configuration loading and management
//!
//! Sources, lowest precedence first: built-in defaults, the YAML file named by
//! `SHOP_CONFIG`, then the `SHOP_HOST` / `SHOP_PORT` / `SHOP_DATA_DIR`
//! environment overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_VAR: &str = "SHOP_CONFIG";
pub const HOST_VAR: &str = "SHOP_HOST";
pub const PORT_VAR: &str = "SHOP_PORT";
pub const DATA_DIR_VAR: &str = "SHOP_DATA_DIR";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Directory holding the collection files
    pub data_dir: PathBuf,

    /// Products collection file name, relative to `data_dir`
    pub products_file: String,

    /// Carts collection file name, relative to `data_dir`
    pub carts_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_dir: PathBuf::from("data"),
            products_file: "products.json".to_string(),
            carts_file: "carts.json".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };
        base.apply_overrides(lookup)
    }

    /// Apply the `SHOP_*` overrides on top of this configuration
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup(HOST_VAR) {
            self.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid {PORT_VAR} value '{port}'"))?;
        }
        if let Some(data_dir) = lookup(DATA_DIR_VAR) {
            self.data_dir = PathBuf::from(data_dir);
        }
        Ok(self)
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(&self.products_file)
    }

    pub fn carts_path(&self) -> PathBuf {
        self.data_dir.join(&self.carts_file)
    }

    /// Address the listener binds to, as `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
