//! Query builder - maps trigger options to a backend query

use log::debug;

use super::datetime::parse_datetime;
use crate::core::error::TriggerError;
use crate::core::models::{TimeWindow, TriggerOptions, TriggerQuery};

/// Build the backend query for a set of options
///
/// At most one time bound is set: a non-empty `until` wins and `since` is
/// then ignored, otherwise a non-empty `since` is used.
pub fn build_query(options: &TriggerOptions) -> Result<TriggerQuery, TriggerError> {
    let window = if let Some(until) = options.until() {
        Some(TimeWindow::Till(parse_bound(until)?))
    } else if let Some(since) = options.since() {
        Some(TimeWindow::Since(parse_bound(since)?))
    } else {
        None
    };

    let query = TriggerQuery {
        sort_fields: options.sort.split(',').map(String::from).collect(),
        sort_order: options.order.clone(),
        min_severity: options.min_severity,
        limit: options.limit.clone(),
        only_unacknowledged: options.only_unacknowledged,
        maintenance_only: options.maintenance_only,
        recent_only: options.recent_only,
        problem_only: options.problem_only,
        window,
    };

    debug!("built trigger query: {query:?}");
    Ok(query)
}

fn parse_bound(input: &str) -> Result<i64, TriggerError> {
    parse_datetime(input).map_err(|source| TriggerError::Query {
        input: input.to_string(),
        source,
    })
}
