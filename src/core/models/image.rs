//! Image dimension model

use serde::{Deserialize, Serialize};

/// Pixel dimensions of a task's attached image
///
/// Resolved per task via the dimension probe and consumed only by the
/// geometry validators; never persisted in the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Image width in pixels
    pub width: f64,
    /// Image height in pixels
    pub height: f64,
}

impl ImageDimensions {
    /// Construct from integral pixel counts
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }
}
