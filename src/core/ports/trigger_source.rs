//! Trigger source port
//!
//! Defines the interface for fetching and acknowledging triggers.

use super::super::models::{Trigger, TriggerQuery};

/// A monitoring backend that tracks triggers
///
/// Each call is one blocking round trip. Implementations own their transport
/// concerns (authentication, timeouts); the core never retries.
#[cfg_attr(test, mockall::automock)]
pub trait TriggerSource: Send + Sync {
    /// Fetch triggers matching a query, in backend order
    fn get_triggers(&self, query: &TriggerQuery) -> anyhow::Result<Vec<Trigger>>;

    /// Acknowledge the given events in a single all-or-nothing call
    fn acknowledge(&self, event_ids: &[String]) -> anyhow::Result<()>;
}
