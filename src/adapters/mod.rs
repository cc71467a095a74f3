//! Adapter implementations for port traits
//!
//! - [`zabbix`] - Zabbix JSON-RPC implementation of `TriggerSource`

pub mod zabbix;

pub use zabbix::ZabbixClient;
