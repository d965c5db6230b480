//! JSON file report sink
//!
//! Implements [`ReportSink`] by writing the document to a temporary file
//! next to the target and renaming it into place, so a crashed run never
//! leaves a partial report behind.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::models::ReportDocument;
use crate::core::ports::ReportSink;

/// Report sink writing pretty-printed JSON files atomically
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileSink;

impl JsonFileSink {
    /// Create a new sink
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportSink for JsonFileSink {
    fn write(&self, path: &Path, document: &ReportDocument) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create report directory {}", parent.display()))?;
        }

        let content =
            serde_json::to_string_pretty(document).context("could not serialize report")?;

        // rename within the same directory keeps the swap atomic
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .with_context(|| format!("could not write report to {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("could not move report into place at {}", path.display()))?;

        Ok(())
    }
}
