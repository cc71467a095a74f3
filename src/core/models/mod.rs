//! Domain models
//!
//! - [`TriggerOptions`] - validated options for one invocation
//! - [`SearchQuery`] - positional tokens split into words and a pattern
//! - [`TriggerQuery`] - the typed backend query
//! - [`Trigger`] - an alert condition fetched from the backend

mod options;
mod query;
mod search;
mod severity;
mod trigger;

pub use options::{DEFAULT_LIMIT, DEFAULT_ORDER, DEFAULT_SORT, TriggerOptions};
pub use query::{TimeWindow, TriggerQuery};
pub use search::{PATTERN_MARKER, SearchQuery};
pub use severity::Severity;
pub use trigger::{LastEvent, Trigger, TriggerStatus};
