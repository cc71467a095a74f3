//! Search query model

/// Prefix that turns a positional token into the search pattern
pub const PATTERN_MARKER: char = '/';

/// Positional search tokens split into plain words and a pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Plain tokens, in the order given
    pub words: Vec<String>,
    /// Pattern with its marker stripped, empty when absent
    pub pattern: String,
}

impl SearchQuery {
    /// Whether a pattern was given
    #[must_use]
    pub fn has_pattern(&self) -> bool {
        !self.pattern.is_empty()
    }
}
