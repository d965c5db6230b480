//! Dimension probe port
//!
//! Defines the interface for resolving an image's pixel size.

use crate::core::models::ImageDimensions;

/// Resolves the pixel width and height of an image by address
///
/// A probe failure must surface as an error, never as a partial or
/// undefined value; the dispatcher converts it into fail-closed error
/// results for every geometry check of the affected task.
pub trait DimensionProbe: Send + Sync {
    /// Resolve the dimensions of the image at `url`
    fn probe(&self, url: &str) -> anyhow::Result<ImageDimensions>;
}
