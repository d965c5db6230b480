//! Check dispatch
//!
//! Runs the full validator battery against every annotation of a task.
//! A task with an absent or empty annotation list contributes no results;
//! that is defined behavior, not an error.

use crate::core::models::{CheckResult, ImageDimensions, Task};

use super::validators;

/// Number of validators applied to each annotation
pub const CHECKS_PER_ANNOTATION: usize = 10;

/// Run every validator against every annotation of a task
///
/// Results are produced in annotation order, and within one annotation
/// in the fixed validator order. Each result is independent and carries
/// its own severity, so downstream aggregation does not depend on this
/// ordering beyond presentation.
///
/// `dims` is the resolved pixel size of the task's attached image;
/// `None` makes the geometry checks fail closed.
#[must_use]
pub fn run_checks(task: &Task, dims: Option<ImageDimensions>) -> Vec<CheckResult> {
    let annotations = task.annotations();
    let mut results = Vec::with_capacity(annotations.len() * CHECKS_PER_ANNOTATION);

    for annotation in annotations {
        results.push(validators::check_annotation_type(
            &task.params.objects_to_annotate,
            annotation,
        ));
        results.push(validators::check_occlusion(annotation));
        results.push(validators::check_truncation(annotation));
        results.push(validators::check_background_color(annotation));
        results.push(validators::check_box_label_size(&task.params, annotation));
        results.push(validators::check_box_image_size(dims, annotation));
        results.push(validators::check_box_edge_truncation(dims, annotation));
        results.push(validators::check_traffic_light_background_color(annotation));
        results.push(validators::check_construction_sign_background_color(annotation));
        results.push(validators::check_non_visible_face_background_color(annotation));
    }

    results
}
