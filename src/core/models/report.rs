//! Quality report models
//!
//! The three-tier aggregate over all checked tasks, plus the document
//! shape that gets persisted by the report sink.

use serde::{Deserialize, Serialize};

use super::CheckResult;

/// All check results of one severity for one task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResults {
    /// The task these results belong to
    pub task_id: String,

    /// Results in production order (annotation order x validator order)
    pub results: Vec<CheckResult>,
}

/// The tiered quality report over a full task set
///
/// A task appears in a tier only if at least one of its checks produced
/// that severity; a single task may appear in several tiers at once.
/// Built by pure accumulation and never edited afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityReport {
    /// Tasks with at least one error, with their error results
    pub errors: Vec<TaskResults>,

    /// Tasks with at least one warning, with their warning results
    pub warnings: Vec<TaskResults>,

    /// Tasks with at least one passing check, with their passing results
    pub success: Vec<TaskResults>,
}

impl QualityReport {
    /// Whether no task contributed any result at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.success.is_empty()
    }
}

/// The document written by the report sink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Name of the annotation project the report covers
    #[serde(rename = "projectName")]
    pub project_name: String,

    /// Fixed human-readable summary of the document
    pub description: String,

    /// Who ran the report, when known
    #[serde(rename = "authorName", skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    /// RFC 3339 creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// The tiered report body
    #[serde(rename = "qualityReport")]
    pub quality_report: QualityReport,
}

impl ReportDocument {
    /// Wrap a finished report in the persisted document shape
    #[must_use]
    pub fn new(project_name: &str, author_name: Option<String>, report: QualityReport) -> Self {
        Self {
            project_name: project_name.to_string(),
            description: "Task Quality Report".to_string(),
            author_name,
            created: Some(chrono::Utc::now().to_rfc3339()),
            quality_report: report,
        }
    }
}
