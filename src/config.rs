//! Run configuration
//!
//! One explicit configuration object assembled at startup from environment
//! variables and CLI flags, then passed into the adapters. There is no
//! process-wide mutable configuration state.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Default report file name
pub const DEFAULT_OUTPUT: &str = "qualityReport.json";

/// Default annotation platform endpoint
pub const DEFAULT_API_URL: &str = "https://api.scale.com/v1";

/// Everything one report run needs to know
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Name of the annotation project to fetch tasks for
    pub project: String,

    /// Where the report document gets written
    pub output: PathBuf,

    /// Recorded in the report as `authorName` when set
    pub author: Option<String>,

    /// Annotation platform API credential
    pub api_key: String,

    /// Annotation platform base URL
    pub base_url: String,
}

impl RunConfig {
    /// Assemble the run configuration, CLI flags winning over environment
    ///
    /// Environment variables: `SCALE_API_KEY` (falling back to `LIVE_KEY`),
    /// `ANNOLINT_PROJECT`, `ANNOLINT_OUTPUT`, `ANNOLINT_AUTHOR`,
    /// `SCALE_API_URL`. The API key and a project name are required.
    pub fn resolve(
        project: Option<String>,
        output: Option<PathBuf>,
        author: Option<String>,
    ) -> anyhow::Result<Self> {
        let api_key = env::var("SCALE_API_KEY")
            .or_else(|_| env::var("LIVE_KEY"))
            .context("missing API credential: set SCALE_API_KEY")?;

        let project = project
            .or_else(|| env::var("ANNOLINT_PROJECT").ok())
            .context("missing project name: pass --project or set ANNOLINT_PROJECT")?;

        let output = output
            .or_else(|| env::var("ANNOLINT_OUTPUT").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let author = author.or_else(|| env::var("ANNOLINT_AUTHOR").ok());

        let base_url =
            env::var("SCALE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self {
            project,
            output,
            author,
            api_key,
            base_url,
        })
    }
}
