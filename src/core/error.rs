//! Errors surfaced by the trigger workflow

use super::services::DateParseError;

/// A failed `triggers` invocation
///
/// Every variant keeps its underlying cause reachable through
/// [`std::error::Error::source`], so the binary can print the whole chain.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    /// Positional tokens that are neither empty nor a pattern
    #[error("unexpected command line token '{word}', use '/{word}' for searching triggers")]
    Usage {
        /// First offending token
        word: String,
    },

    /// A date option could not be parsed
    #[error("can't parse datetime '{input}'")]
    Query {
        /// The date string as given
        input: String,
        /// Why it was rejected
        #[source]
        source: DateParseError,
    },

    /// The backend could not be queried
    #[error("can't obtain triggers")]
    Fetch(#[source] anyhow::Error),

    /// The rendered table could not be written
    #[error("can't write triggers table")]
    Output(#[source] std::io::Error),

    /// The confirmation prompt could not be shown or answered
    #[error("can't read acknowledge confirmation")]
    Confirm(#[source] std::io::Error),

    /// The backend rejected the acknowledgement
    #[error(transparent)]
    Acknowledge(anyhow::Error),
}
