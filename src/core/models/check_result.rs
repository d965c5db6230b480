//! Check result model
//!
//! The outcome of running one validator against one annotation. Validators
//! never fail - every invocation yields exactly one of these.

use serde::{Deserialize, Serialize};

use super::Severity;

/// Success marker used in place of a violation message
pub const PASS_MARK: &str = "\u{2705}";

/// The outcome of one validator on one annotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Which report tier this result lands in
    pub severity: Severity,

    /// UUID of the annotation that was checked
    pub uuid: String,

    /// Human-readable name of the validator
    #[serde(rename = "checkName")]
    pub check_name: String,

    /// Violation message, or a success marker
    pub description: String,
}

impl CheckResult {
    /// A passing result for the given check and annotation
    #[must_use]
    pub fn success(uuid: &str, check_name: &str) -> Self {
        Self {
            severity: Severity::Success,
            uuid: uuid.to_string(),
            check_name: check_name.to_string(),
            description: PASS_MARK.to_string(),
        }
    }

    /// A warning result with a specific message
    #[must_use]
    pub fn warning(uuid: &str, check_name: &str, description: String) -> Self {
        Self {
            severity: Severity::Warning,
            uuid: uuid.to_string(),
            check_name: check_name.to_string(),
            description,
        }
    }

    /// An error result with a specific message
    #[must_use]
    pub fn error(uuid: &str, check_name: &str, description: String) -> Self {
        Self {
            severity: Severity::Error,
            uuid: uuid.to_string(),
            check_name: check_name.to_string(),
            description,
        }
    }
}
