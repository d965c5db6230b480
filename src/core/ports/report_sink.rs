//! Report sink port
//!
//! Defines the interface for persisting a finished quality report.

use std::path::Path;

use crate::core::models::ReportDocument;

/// Persists the final report document
///
/// Implementations must write the full document atomically: either the
/// write succeeds or the run reports an explicit failure, never a
/// partial file.
pub trait ReportSink: Send + Sync {
    /// Serialize and persist the document at the given path
    fn write(&self, path: &Path, document: &ReportDocument) -> anyhow::Result<()>;
}
