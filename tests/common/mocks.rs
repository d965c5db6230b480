//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for testing the pipeline
//! without real network or filesystem I/O.

use std::collections::HashMap;

use anyhow::anyhow;

use annolint::core::models::{ImageDimensions, Task};
use annolint::core::ports::{DimensionProbe, TaskSource};

/// Mock task source backed by a fixed task list
pub struct MockTaskSource {
    tasks: Vec<Task>,
    fail: bool,
}

impl MockTaskSource {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            tasks: Vec::new(),
            fail: true,
        }
    }
}

impl TaskSource for MockTaskSource {
    fn fetch_tasks(&self, _project: &str, _status: &str) -> anyhow::Result<Vec<Task>> {
        if self.fail {
            return Err(anyhow!("task list fetch failed"));
        }
        Ok(self.tasks.clone())
    }
}

/// Mock dimension probe backed by a URL -> dimensions map
///
/// Unknown URLs fail, exercising the fail-closed geometry path.
pub struct MockDimensionProbe {
    dimensions: HashMap<String, ImageDimensions>,
}

impl MockDimensionProbe {
    pub fn empty() -> Self {
        Self {
            dimensions: HashMap::new(),
        }
    }

    pub fn with_image(mut self, url: &str, width: u32, height: u32) -> Self {
        self.dimensions.insert(url.to_string(), ImageDimensions::new(width, height));
        self
    }
}

impl DimensionProbe for MockDimensionProbe {
    fn probe(&self, url: &str) -> anyhow::Result<ImageDimensions> {
        self.dimensions.get(url).copied().ok_or_else(|| anyhow!("no dimensions for {url}"))
    }
}
