//! Search query parser - splits positional tokens
//!
//! Pure function; leftover words are only an error in the context of a
//! command, so that check lives in the workflow.

use crate::core::models::{PATTERN_MARKER, SearchQuery};

/// Split tokens into plain words and a marker-prefixed pattern
///
/// The marker is stripped from the pattern. If several marked tokens are
/// given the last one wins. No case folding or escaping happens here.
#[must_use]
pub fn parse_search<S: AsRef<str>>(tokens: &[S]) -> SearchQuery {
    let mut query = SearchQuery::default();

    for token in tokens {
        let token = token.as_ref();
        match token.strip_prefix(PATTERN_MARKER) {
            Some(pattern) => query.pattern = pattern.to_string(),
            None => query.words.push(token.to_string()),
        }
    }

    query
}
