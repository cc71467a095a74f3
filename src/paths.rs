//! Centralized path definitions for zabbixctl
//!
//! ```text
//! ~/.config/zabbixctl/
//! └── config.toml               # Server address and credentials
//! ```

use std::path::PathBuf;

/// Directory name below the platform config directory
pub const CONFIG_DIR_NAME: &str = "zabbixctl";

/// Configuration filename
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Global config directory (`~/.config/zabbixctl` on Linux)
///
/// `None` when the platform has no notion of a config directory.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Global config file path
#[must_use]
pub fn global_config() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
