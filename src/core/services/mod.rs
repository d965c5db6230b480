//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`validators`] - The fixed battery of per-annotation rule checks
//! - [`dispatcher`] - Run every validator against every annotation of a task
//! - [`aggregator`] - Roll per-task result bags into the tiered report
//! - [`pipeline`] - End-to-end run wired through the port traits

pub mod aggregator;
pub mod dispatcher;
pub mod pipeline;
pub mod validators;

pub use aggregator::aggregate;
pub use dispatcher::run_checks;
pub use pipeline::{ReportRun, run_report};
