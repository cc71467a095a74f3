//! Trigger matcher - tests a trigger's text against a search pattern
//!
//! Patterns are case-sensitive and unanchored. `*` matches any run of
//! characters; every other character is literal, so a pattern without `*`
//! is a plain substring test.
//!
//! - `db` matches `host=db1 desc=disk full`
//! - `db*full` matches `host=db1 desc=disk full`
//! - `DB` does not match `host=db1 desc=disk full`

use regex::Regex;

/// Glob wildcard
const WILDCARD: char = '*';

/// A search pattern compiled once for repeated matching
#[derive(Debug, Clone)]
pub enum PatternMatcher {
    /// Empty pattern, accepts everything
    Any,
    /// No wildcard, substring test
    Literal(String),
    /// Wildcard pattern compiled to a regex
    Glob(Regex),
}

impl PatternMatcher {
    /// Compile a pattern
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        if pattern.is_empty() {
            return Self::Any;
        }
        if !pattern.contains(WILDCARD) {
            return Self::Literal(pattern.to_string());
        }

        let source = pattern.split(WILDCARD).map(regex::escape).collect::<Vec<_>>().join(".*");

        // Every segment is escaped, so compiling can only fail on size limits
        Regex::new(&source).map_or_else(|_| Self::Literal(pattern.to_string()), Self::Glob)
    }

    /// Whether `subject` satisfies the pattern
    #[must_use]
    pub fn matches(&self, subject: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Literal(needle) => subject.contains(needle.as_str()),
            Self::Glob(re) => re.is_match(subject),
        }
    }
}

/// Check a single subject against a pattern
#[must_use]
pub fn matches_pattern(pattern: &str, subject: &str) -> bool {
    PatternMatcher::new(pattern).matches(subject)
}
