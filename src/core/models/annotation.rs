//! Annotation model
//!
//! A single labeled bounding box within a task's response, with geometry
//! and categorical attributes. Annotations are read-only once fetched.

use serde::{Deserialize, Serialize};

/// A single labeled region within a task's response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique identifier within the task
    pub uuid: String,

    /// Category label (e.g. `traffic_control_sign`)
    pub label: String,

    /// Distance in pixels from the top edge of the image
    #[serde(default)]
    pub top: f64,

    /// Distance in pixels from the left edge of the image
    #[serde(default)]
    pub left: f64,

    /// Box width in pixels (some exports call this `boundingBoxWidth`)
    #[serde(default, alias = "boundingBoxWidth")]
    pub width: f64,

    /// Box height in pixels (some exports call this `boundingBoxHeight`)
    #[serde(default, alias = "boundingBoxHeight")]
    pub height: f64,

    /// Categorical attributes attached by the labeler
    #[serde(default)]
    pub attributes: AnnotationAttributes,
}

/// Categorical attributes of an annotation
///
/// Each value is a string-encoded percentage bucket or category name.
/// Missing attributes deserialize to the empty string, which fails every
/// membership check and so surfaces as an error in the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotationAttributes {
    /// How much of the object is hidden, bucketed: "0%".."100%"
    #[serde(default)]
    pub occlusion: String,

    /// How much of the object is cut off by the image edge, bucketed
    #[serde(default)]
    pub truncation: String,

    /// Background color category of the sign
    #[serde(default)]
    pub background_color: String,
}

impl Annotation {
    /// Width-to-height aspect ratio of the bounding box
    ///
    /// Returns `None` when the height is zero.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height == 0.0 {
            None
        } else {
            Some(self.width / self.height)
        }
    }

    /// Declared truncation as a number in 0..=100
    ///
    /// Parses the `"25%"` form; anything unparsable counts as 0, matching
    /// how a missing declaration is treated by the edge checks.
    #[must_use]
    pub fn truncation_percent(&self) -> f64 {
        self.attributes.truncation.trim_end_matches('%').trim().parse().unwrap_or(0.0)
    }
}
