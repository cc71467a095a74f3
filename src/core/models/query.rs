//! Typed backend query
//!
//! The query is built once by the query builder and serialized to the
//! backend's `trigger.get` parameter map only at the adapter boundary.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::json;

/// Last-change time window; at most one bound is ever set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Triggers changed at or before this unix timestamp
    Till(i64),
    /// Triggers changed at or after this unix timestamp
    Since(i64),
}

/// Query for active triggers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerQuery {
    /// Sort fields, in priority order
    pub sort_fields: Vec<String>,
    /// Sort order
    pub sort_order: String,
    /// Minimum severity
    pub min_severity: u8,
    /// Result limit, passed through unvalidated
    pub limit: String,
    /// `withLastEventUnacknowledged`
    pub only_unacknowledged: bool,
    /// `maintenance`
    pub maintenance_only: bool,
    /// `only_true`
    pub recent_only: bool,
    /// `filter: {value: 1}`
    pub problem_only: bool,
    /// `lastChangeTill` or `lastChangeSince`
    pub window: Option<TimeWindow>,
}

impl Serialize for TriggerQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("sortfield", &self.sort_fields)?;
        map.serialize_entry("sortorder", &self.sort_order)?;
        map.serialize_entry("min_severity", &self.min_severity)?;
        map.serialize_entry("limit", &self.limit)?;

        if self.only_unacknowledged {
            map.serialize_entry("withLastEventUnacknowledged", "1")?;
        }
        if self.maintenance_only {
            map.serialize_entry("maintenance", "1")?;
        }
        if self.recent_only {
            map.serialize_entry("only_true", "1")?;
        }
        if self.problem_only {
            map.serialize_entry("filter", &json!({ "value": "1" }))?;
        }

        match self.window {
            Some(TimeWindow::Till(at)) => map.serialize_entry("lastChangeTill", &at)?,
            Some(TimeWindow::Since(at)) => map.serialize_entry("lastChangeSince", &at)?,
            None => {},
        }

        map.end()
    }
}
