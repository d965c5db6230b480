//! Report aggregation
//!
//! Rolls per-task bags of check results into the tiered quality report.
//! This is a pure reduction over the full task set: the report is only
//! valid once every task's annotations have been checked.

use crate::core::models::{CheckResult, QualityReport, Severity, TaskResults};

/// Partition each task's check results by severity into the tiered report
///
/// A task is recorded under a tier only if it produced at least one result
/// of that severity; one task can land in several tiers at once. Within a
/// tier, results keep the order they were produced in. Running this twice
/// over the same input yields an identical report.
#[must_use]
pub fn aggregate<I>(task_results: I) -> QualityReport
where
    I: IntoIterator<Item = (String, Vec<CheckResult>)>,
{
    let mut report = QualityReport::default();

    for (task_id, results) in task_results {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut success = Vec::new();

        for result in results {
            match result.severity {
                Severity::Error => errors.push(result),
                Severity::Warning => warnings.push(result),
                Severity::Success => success.push(result),
            }
        }

        push_tier(&mut report.errors, &task_id, errors);
        push_tier(&mut report.warnings, &task_id, warnings);
        push_tier(&mut report.success, &task_id, success);
    }

    report
}

fn push_tier(tier: &mut Vec<TaskResults>, task_id: &str, results: Vec<CheckResult>) {
    if !results.is_empty() {
        tier.push(TaskResults {
            task_id: task_id.to_string(),
            results,
        });
    }
}
