//! Check severity levels
//!
//! Defines which report tier a check result lands in.

use serde::{Deserialize, Serialize};

/// Check severity levels
///
/// Ordered for triage: `Error > Warning > Success`. The report never
/// combines severities per annotation - each validator contributes its own
/// independent result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Check passed
    Success,
    /// Suspicious but not conclusively wrong
    Warning,
    /// Definite violation of the labeling spec
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!("Invalid severity: {s}. Use: error, warning, success")),
        }
    }
}
