//! End-to-end report pipeline
//!
//! Wires the task source and dimension probe ports through dispatch and
//! aggregation. Pure with respect to the ports: all I/O happens behind
//! the trait objects passed in.

use log::{debug, warn};

use crate::core::models::QualityReport;
use crate::core::ports::{DimensionProbe, TaskSource};

use super::{aggregate, run_checks};

/// A finished pipeline run
#[derive(Debug, Clone)]
pub struct ReportRun {
    /// The aggregated tiered report
    pub report: QualityReport,
    /// How many tasks were fetched and checked
    pub tasks_checked: usize,
}

/// Fetch, check, and aggregate every task of a project
///
/// Tasks are processed sequentially; the image dimensions of a task are
/// resolved once before its annotations are checked. A probe failure is
/// not fatal - the affected geometry checks fail closed - but a task
/// fetch failure aborts the run with no report.
pub fn run_report(
    source: &dyn TaskSource,
    probe: &dyn DimensionProbe,
    project: &str,
    status: &str,
) -> anyhow::Result<ReportRun> {
    let tasks = source.fetch_tasks(project, status)?;
    debug!("fetched {} {status} task(s) for project {project}", tasks.len());

    let mut task_results = Vec::with_capacity(tasks.len());
    for task in &tasks {
        let dims = if task.annotations().is_empty() {
            // nothing to check, skip the probe round trip
            None
        } else {
            match probe.probe(&task.params.attachment) {
                Ok(dims) => Some(dims),
                Err(err) => {
                    warn!(
                        "could not resolve dimensions of {} for task {}: {err:#}",
                        task.params.attachment, task.task_id
                    );
                    None
                },
            }
        };

        task_results.push((task.task_id.clone(), run_checks(task, dims)));
    }

    Ok(ReportRun {
        report: aggregate(task_results),
        tasks_checked: tasks.len(),
    })
}
