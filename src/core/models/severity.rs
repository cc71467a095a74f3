//! Trigger severity levels
//!
//! Mirrors the Zabbix trigger priority scale.

use serde::{Deserialize, Serialize};

/// Trigger severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Priority 0
    #[default]
    NotClassified,
    /// Priority 1
    Information,
    /// Priority 2
    Warning,
    /// Priority 3
    Average,
    /// Priority 4
    High,
    /// Priority 5
    Disaster,
}

impl Severity {
    /// Highest priority value the backend knows
    pub const MAX_PRIORITY: u8 = 5;

    /// Map a backend priority to a severity, clamping unknown values
    #[must_use]
    pub const fn from_priority(priority: u8) -> Self {
        match priority {
            0 => Self::NotClassified,
            1 => Self::Information,
            2 => Self::Warning,
            3 => Self::Average,
            4 => Self::High,
            _ => Self::Disaster,
        }
    }

    /// Backend priority value
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotClassified => write!(f, "NOT_CLASSIFIED"),
            Self::Information => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Average => write!(f, "AVERAGE"),
            Self::High => write!(f, "HIGH"),
            Self::Disaster => write!(f, "DISASTER"),
        }
    }
}
