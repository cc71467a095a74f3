//! Init command - write a config file template

use std::path::Path;

use zabbixctl::config::Config;
use zabbixctl::output::{OperationResult, OutputMode};

/// Write the config template unless a config file already exists
pub fn init(config_path: Option<&Path>, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Config::resolve_path(config_path)?;

    if path.exists() && !force {
        let result = OperationResult {
            success: false,
            message: format!("{} already exists (use --force to overwrite)", path.display()),
        };
        result.render(mode);
        return Ok(());
    }

    Config::template().save(&path)?;

    let result = OperationResult {
        success: true,
        message: format!("Created {}\nEdit it to point at your Zabbix server.", path.display()),
    };
    result.render(mode);

    Ok(())
}
