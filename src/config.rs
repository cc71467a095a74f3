//! Configuration management
//!
//! Config is stored at `~/.config/zabbixctl/config.toml` (XDG standard)
//! unless a path is given explicitly:
//!
//! ```toml
//! [server]
//! address = "https://zabbix.example.com"
//! username = "Admin"
//! password = "zabbix"
//! timeout_secs = 30
//!
//! [acknowledge]
//! message = "Acknowledged via zabbixctl"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;

/// zabbixctl configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection
    #[serde(default)]
    pub server: ServerConfig,
    /// Acknowledge settings
    #[serde(default)]
    pub acknowledge: AcknowledgeConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Frontend base URL or full `api_jsonrpc.php` URL
    #[serde(default)]
    pub address: String,
    /// Account name
    #[serde(default)]
    pub username: String,
    /// Account password
    #[serde(default)]
    pub password: String,
    /// Transport timeout for every request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Acknowledge settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgeConfig {
    /// Message attached to every acknowledgement
    #[serde(default = "default_ack_message")]
    pub message: String,
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_ack_message() -> String {
    "Acknowledged via zabbixctl".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            username: String::new(),
            password: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for AcknowledgeConfig {
    fn default() -> Self {
        Self {
            message: default_ack_message(),
        }
    }
}

impl Config {
    /// Config file to use: the explicit one, or the global default
    pub fn resolve_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => paths::global_config().context("can't determine config directory"),
        }
    }

    /// Template written by `zabbixctl init`
    #[must_use]
    pub fn template() -> Self {
        Self {
            server: ServerConfig {
                address: "https://zabbix.example.com".to_string(),
                username: "Admin".to_string(),
                ..ServerConfig::default()
            },
            acknowledge: AcknowledgeConfig::default(),
        }
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from disk
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("can't read config file '{}'", path.display()))?;
        Self::parse(&content).with_context(|| format!("can't load config file '{}'", path.display()))
    }

    /// Save config to disk, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.server.address.trim().is_empty() {
            anyhow::bail!("server.address is not set");
        }
        Ok(())
    }
}
