//! Trigger model
//!
//! A trigger is an alert condition tracked by the monitoring backend. Adapters
//! convert their wire format into this type before it reaches the core.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use super::Severity;

/// Timestamp format used in the table and the matching subject
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Whether a trigger is currently firing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerStatus {
    /// Resolved
    #[default]
    Ok,
    /// Firing
    Problem,
}

impl std::fmt::Display for TriggerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Problem => write!(f, "PROBLEM"),
        }
    }
}

/// The most recent event generated by a trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastEvent {
    /// Event identifier, the unit of acknowledgement
    pub id: String,
    /// Whether an operator already acknowledged the event
    pub acknowledged: bool,
    /// Event time (unix seconds)
    pub clock: i64,
}

/// An alert condition fetched from the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// Trigger identifier
    pub id: String,
    /// Expanded trigger description
    pub description: String,
    /// Severity level
    pub severity: Severity,
    /// Problem or resolved
    pub status: TriggerStatus,
    /// Last state change (unix seconds)
    pub last_change: i64,
    /// Name of the first host the trigger belongs to
    pub hostname: String,
    /// Most recent event, if the trigger ever fired
    pub last_event: Option<LastEvent>,
}

impl Trigger {
    /// Identifier of the last event, if any
    #[must_use]
    pub fn event_id(&self) -> Option<&str> {
        self.last_event.as_ref().map(|event| event.id.as_str()).filter(|id| !id.is_empty())
    }

    /// Whether the last event is acknowledged
    #[must_use]
    pub fn is_acknowledged(&self) -> bool {
        self.last_event.as_ref().is_some_and(|event| event.acknowledged)
    }

    /// Last change rendered in local time
    #[must_use]
    pub fn date_time(&self) -> String {
        Local
            .timestamp_opt(self.last_change, 0)
            .single()
            .map_or_else(|| self.last_change.to_string(), |at| at.format(DATETIME_FORMAT).to_string())
    }

    /// `ACK` or `NACK`
    #[must_use]
    pub fn ack_status(&self) -> &'static str {
        if self.is_acknowledged() { "ACK" } else { "NACK" }
    }

    /// Table columns: event id, timestamp, severity, status, ack, host, description
    #[must_use]
    pub fn columns(&self) -> [String; 7] {
        [
            self.event_id().unwrap_or("-").to_string(),
            self.date_time(),
            self.severity.to_string(),
            self.status.to_string(),
            self.ack_status().to_string(),
            self.hostname.clone(),
            self.description.clone(),
        ]
    }
}

/// Columns joined by single spaces; this is what search patterns match against
impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.columns().join(" "))
    }
}
