//! Task model
//!
//! One unit of completed annotation work: the labeling spec the worker was
//! given (`params`) and what they produced (`response`). Fetched once per
//! run and never mutated.

use serde::{Deserialize, Serialize};

use super::Annotation;

/// One completed annotation task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Platform-assigned task identifier
    pub task_id: String,

    /// The labeling spec this task was created with
    pub params: TaskParams,

    /// The worker's response; absent when the task produced nothing
    #[serde(default)]
    pub response: Option<TaskResponse>,
}

/// Labeling spec parameters of a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskParams {
    /// Labels the worker was allowed to use
    #[serde(default)]
    pub objects_to_annotate: Vec<String>,

    /// Minimum acceptable box width in pixels
    #[serde(default, rename = "minWidth")]
    pub min_width: f64,

    /// Minimum acceptable box height in pixels
    #[serde(default, rename = "minHeight")]
    pub min_height: f64,

    /// URL of the image that was annotated
    #[serde(default)]
    pub attachment: String,
}

/// The response portion of a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Annotated regions in declaration order; may be absent
    #[serde(default)]
    pub annotations: Option<Vec<Annotation>>,
}

impl Task {
    /// Annotations of this task in declaration order, empty when absent
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        self.response
            .as_ref()
            .and_then(|r| r.annotations.as_deref())
            .unwrap_or_default()
    }
}
