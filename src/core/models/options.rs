//! Trigger command options
//!
//! Built once from validated command-line input and read-only afterwards.

/// Default sort fields (comma separated, as typed on the command line)
pub const DEFAULT_SORT: &str = "lastchange,priority";

/// Default sort order
pub const DEFAULT_ORDER: &str = "DESC";

/// Default result limit (`0` leaves the limit to the backend)
pub const DEFAULT_LIMIT: &str = "0";

/// Options for a single `triggers` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerOptions {
    /// Acknowledge the matched triggers after displaying them
    pub acknowledge: bool,
    /// Skip the interactive confirmation before acknowledging
    pub no_confirm: bool,
    /// Only triggers whose last event is unacknowledged
    pub only_unacknowledged: bool,
    /// Only triggers of hosts in maintenance
    pub maintenance_only: bool,
    /// Only triggers in the problem state
    pub problem_only: bool,
    /// Only triggers that changed state recently
    pub recent_only: bool,
    /// Minimum severity level (0..=5)
    pub min_severity: u8,
    /// Lower bound of the last-change window, unparsed
    pub since: Option<String>,
    /// Upper bound of the last-change window, unparsed
    pub until: Option<String>,
    /// Raw comma-separated sort field list
    pub sort: String,
    /// Sort order passed to the backend
    pub order: String,
    /// Result limit passed to the backend verbatim
    pub limit: String,
    /// Positional search tokens
    pub search: Vec<String>,
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            acknowledge: false,
            no_confirm: false,
            only_unacknowledged: false,
            maintenance_only: false,
            problem_only: false,
            recent_only: false,
            min_severity: 0,
            since: None,
            until: None,
            sort: DEFAULT_SORT.to_string(),
            order: DEFAULT_ORDER.to_string(),
            limit: DEFAULT_LIMIT.to_string(),
            search: Vec::new(),
        }
    }
}

impl TriggerOptions {
    /// `since`, ignoring an empty value
    #[must_use]
    pub fn since(&self) -> Option<&str> {
        self.since.as_deref().filter(|value| !value.is_empty())
    }

    /// `until`, ignoring an empty value
    #[must_use]
    pub fn until(&self) -> Option<&str> {
        self.until.as_deref().filter(|value| !value.is_empty())
    }
}
