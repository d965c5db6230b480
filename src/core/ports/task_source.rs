//! Task source port
//!
//! Defines the interface for fetching annotation tasks.

use crate::core::models::Task;

/// Source of completed annotation tasks
///
/// Implementations fetch task records from an annotation platform.
/// A fetch failure is fatal to the run: no partial report is produced.
pub trait TaskSource: Send + Sync {
    /// Fetch all tasks of a project matching a status filter
    ///
    /// Returns tasks in the platform's declaration order.
    fn fetch_tasks(&self, project: &str, status: &str) -> anyhow::Result<Vec<Task>>;
}
