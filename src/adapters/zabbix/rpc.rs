//! Zabbix JSON-RPC wire types
//!
//! Zabbix encodes most numbers as strings and returns `lastEvent` as an empty
//! array when a trigger never fired; both quirks stay in this module.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::models::{LastEvent, Severity, Trigger, TriggerStatus};

/// JSON-RPC protocol version sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// `event.acknowledge` action bits: close problem (1) is never set,
/// acknowledge (2) and add message (4) are
pub const ACKNOWLEDGE_WITH_MESSAGE: u8 = 2 | 4;

/// A JSON-RPC request envelope
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P> {
    /// Always `2.0`
    pub jsonrpc: &'static str,
    /// API method, e.g. `trigger.get`
    pub method: &'a str,
    /// Method parameters
    pub params: P,
    /// Request id, echoed back by the server
    pub id: u64,
    /// Session token, absent for `user.login`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
}

/// A JSON-RPC response envelope
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    /// Present on success
    pub result: Option<T>,
    /// Present on failure
    pub error: Option<RpcError>,
}

/// Error object returned by the Zabbix API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("zabbix api error {code}: {message} {data}")]
pub struct RpcError {
    /// JSON-RPC error code
    pub code: i64,
    /// Short message, e.g. `Invalid params.`
    pub message: String,
    /// Detailed explanation
    #[serde(default)]
    pub data: String,
}

/// `user.login` parameters
#[derive(Debug, Serialize)]
pub struct LoginParams<'a> {
    /// Account name
    pub username: &'a str,
    /// Account password
    pub password: &'a str,
}

/// `event.acknowledge` parameters
#[derive(Debug, Serialize)]
pub struct AcknowledgeParams<'a> {
    /// Events to acknowledge
    pub eventids: &'a [String],
    /// Action bit mask
    pub action: u8,
    /// Message attached to the acknowledgement
    pub message: &'a str,
}

/// A trigger as returned by `trigger.get`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTrigger {
    /// Trigger id
    #[serde(rename = "triggerid")]
    pub trigger_id: String,
    /// Description (expanded when `expandDescription` is set)
    #[serde(default)]
    pub description: String,
    /// Priority `0`..`5`
    #[serde(default)]
    pub priority: String,
    /// `0` OK, `1` problem
    #[serde(default)]
    pub value: String,
    /// Last state change (unix seconds)
    #[serde(rename = "lastchange", default)]
    pub last_change: String,
    /// Hosts the trigger belongs to
    #[serde(default)]
    pub hosts: Vec<WireHost>,
    /// Most recent event
    #[serde(default, deserialize_with = "deserialize_last_event")]
    pub last_event: Option<WireEvent>,
}

/// A host reference inside a trigger
#[derive(Debug, Clone, Deserialize)]
pub struct WireHost {
    /// Technical host name
    #[serde(default)]
    pub host: String,
}

/// An event reference inside a trigger
#[derive(Debug, Clone, Deserialize)]
pub struct WireEvent {
    /// Event id
    #[serde(rename = "eventid")]
    pub event_id: String,
    /// `0` or `1`
    #[serde(default)]
    pub acknowledged: String,
    /// Event time (unix seconds)
    #[serde(default)]
    pub clock: String,
}

fn deserialize_last_event<'de, D>(deserializer: D) -> Result<Option<WireEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum EventOrEmpty {
        Event(WireEvent),
        Empty(#[allow(dead_code)] Vec<serde_json::Value>),
    }

    Ok(match Option::<EventOrEmpty>::deserialize(deserializer)? {
        Some(EventOrEmpty::Event(event)) => Some(event),
        Some(EventOrEmpty::Empty(_)) | None => None,
    })
}

fn parse_number(value: &str) -> i64 {
    value.trim().parse().unwrap_or_default()
}

impl From<WireTrigger> for Trigger {
    fn from(wire: WireTrigger) -> Self {
        let priority = u8::try_from(parse_number(&wire.priority)).unwrap_or(Severity::MAX_PRIORITY);
        let status =
            if wire.value.trim() == "1" { TriggerStatus::Problem } else { TriggerStatus::Ok };

        Self {
            id: wire.trigger_id,
            description: wire.description,
            severity: Severity::from_priority(priority),
            status,
            last_change: parse_number(&wire.last_change),
            hostname: wire.hosts.into_iter().next().map(|h| h.host).unwrap_or_default(),
            last_event: wire.last_event.map(|event| LastEvent {
                acknowledged: event.acknowledged.trim() == "1",
                clock: parse_number(&event.clock),
                id: event.event_id,
            }),
        }
    }
}
