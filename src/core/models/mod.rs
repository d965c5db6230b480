//! Domain models for annolint
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - One unit of completed annotation work
//! - [`Annotation`] - A single labeled region within a task's response
//! - [`CheckResult`] - The outcome of one validator on one annotation
//! - [`Severity`] - Which report tier a result lands in
//! - [`QualityReport`] - The three-tier aggregate over all tasks

mod annotation;
mod check_result;
mod image;
mod report;
mod severity;
mod task;

pub use annotation::{Annotation, AnnotationAttributes};
pub use check_result::CheckResult;
pub use image::ImageDimensions;
pub use report::{QualityReport, ReportDocument, TaskResults};
pub use severity::Severity;
pub use task::{Task, TaskParams, TaskResponse};
