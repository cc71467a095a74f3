//! Triggers command - show and optionally acknowledge triggers

use std::path::Path;

use log::debug;

use zabbixctl::adapters::ZabbixClient;
use zabbixctl::config::Config;
use zabbixctl::core::models::TriggerOptions;
use zabbixctl::core::services::{Console, handle_triggers};
use zabbixctl::output::OutputMode;

/// Show triggers from the configured server
pub fn triggers(
    options: &TriggerOptions,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let path = Config::resolve_path(config_path)?;
    let config = Config::load(&path)?;

    let client = ZabbixClient::new(&config.server, &config.acknowledge.message)?;
    debug!("using {}", client.endpoint());

    let outcome = handle_triggers(&client, options, mode, &mut Console::stdio())?;
    debug!("triggers finished: {outcome:?}");

    Ok(())
}
