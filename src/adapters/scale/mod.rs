//! Scale annotation platform task source
//!
//! Implements [`TaskSource`] against the platform's `/tasks` endpoint,
//! authenticating with HTTP basic auth (the API key as username) and
//! following `next_token` pagination until the project is exhausted.

use std::time::Duration;

use anyhow::Context;
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::RunConfig;
use crate::core::models::Task;
use crate::core::ports::TaskSource;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 60;
const PAGE_SIZE: &str = "100";

/// Task source backed by the Scale HTTP API
#[derive(Debug)]
pub struct ScaleTaskSource {
    client: Client,
    api_key: String,
    base_url: String,
}

/// One page of the task listing
#[derive(Debug, Deserialize)]
struct TaskPage {
    #[serde(default)]
    docs: Vec<Task>,
    #[serde(default)]
    next_token: Option<String>,
}

impl ScaleTaskSource {
    /// Build a task source from the run configuration
    pub fn new(config: &RunConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("annolint/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn fetch_page(
        &self,
        project: &str,
        status: &str,
        next_token: Option<&str>,
    ) -> anyhow::Result<TaskPage> {
        let mut request = self
            .client
            .get(format!("{}/tasks", self.base_url))
            .basic_auth(&self.api_key, None::<&str>)
            .query(&[("project", project), ("status", status), ("limit", PAGE_SIZE)]);

        if let Some(token) = next_token {
            request = request.query(&[("next_token", token)]);
        }

        let response = request
            .send()
            .with_context(|| format!("task list request for project {project} failed"))?
            .error_for_status()
            .with_context(|| format!("task list request for project {project} rejected"))?;

        response.json().context("task list response was not valid JSON")
    }
}

impl TaskSource for ScaleTaskSource {
    fn fetch_tasks(&self, project: &str, status: &str) -> anyhow::Result<Vec<Task>> {
        let mut tasks = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = self.fetch_page(project, status, next_token.as_deref())?;
            debug!("fetched page of {} task(s)", page.docs.len());
            tasks.extend(page.docs);

            match page.next_token {
                Some(token) if !token.is_empty() => next_token = Some(token),
                _ => break,
            }
        }

        Ok(tasks)
    }
}
