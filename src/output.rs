//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::QualityReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of a finished report run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Project the report covers
    pub project: String,
    /// Number of tasks fetched and checked
    pub tasks_checked: usize,
    /// Tasks with at least one error
    pub tasks_with_errors: usize,
    /// Tasks with at least one warning
    pub tasks_with_warnings: usize,
    /// Tasks with at least one passing check
    pub tasks_with_success: usize,
    /// Where the report document was written
    pub output_file: String,
}

impl RunSummary {
    /// Build a summary from a finished report
    #[must_use]
    pub fn new(project: &str, tasks_checked: usize, report: &QualityReport, output_file: &str) -> Self {
        Self {
            project: project.to_string(),
            tasks_checked,
            tasks_with_errors: report.errors.len(),
            tasks_with_warnings: report.warnings.len(),
            tasks_with_success: report.success.len(),
            output_file: output_file.to_string(),
        }
    }

    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Checked {} task(s) of project \"{}\"\n", self.tasks_checked, self.project);
        println!(
            "Tasks w/ Errors: {}  Tasks w/ Warnings: {}  Tasks w/ Success: {}",
            self.tasks_with_errors, self.tasks_with_warnings, self.tasks_with_success
        );
        println!("\nReport written to {}", self.output_file);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
