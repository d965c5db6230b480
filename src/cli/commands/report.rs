//! Generate a quality report for an annotation project

use std::path::PathBuf;

use log::info;

use annolint::adapters::{HttpDimensionProbe, JsonFileSink, ScaleTaskSource};
use annolint::config::RunConfig;
use annolint::core::models::ReportDocument;
use annolint::core::ports::ReportSink;
use annolint::core::services::run_report;
use annolint::output::{OutputMode, RunSummary};

/// Fetch tasks, run the full check battery, and persist the report
///
/// A task fetch or report write failure aborts the run with no partial
/// report; everything else surfaces inside the report itself.
pub fn report(
    project: Option<String>,
    output: Option<PathBuf>,
    author: Option<String>,
    status: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = RunConfig::resolve(project, output, author)?;

    let source = ScaleTaskSource::new(&config)?;
    let probe = HttpDimensionProbe::new()?;

    info!("generating quality report for project {}", config.project);
    let run = run_report(&source, &probe, &config.project, status)?;

    let document = ReportDocument::new(&config.project, config.author.clone(), run.report);
    JsonFileSink::new().write(&config.output, &document)?;

    let summary = RunSummary::new(
        &config.project,
        run.tasks_checked,
        &document.quality_report,
        &config.output.display().to_string(),
    );
    summary.render(mode);

    Ok(())
}
