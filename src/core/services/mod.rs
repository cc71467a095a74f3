//! Core services
//!
//! - [`parse_search`] - split positional tokens into words and a pattern
//! - [`build_query`] - map options to a backend query
//! - [`matches_pattern`] - test a trigger's text against a pattern
//! - [`parse_datetime`] - turn user date strings into unix timestamps
//! - [`handle_triggers`] - fetch, display and optionally acknowledge

mod datetime;
mod matcher;
mod query_builder;
mod search_parser;
mod workflow;

pub use datetime::{DateParseError, parse_datetime, parse_datetime_at};
pub use matcher::{PatternMatcher, matches_pattern};
pub use query_builder::build_query;
pub use search_parser::parse_search;
pub use workflow::{Console, Outcome, confirm_acknowledge, handle_triggers};
