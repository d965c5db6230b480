//! Per-annotation rule checks
//!
//! Each validator is a pure function from one annotation (plus whatever
//! spec parameters the rule needs) to exactly one [`CheckResult`]. A
//! validator never fails and never raises: a rule whose trigger does not
//! apply returns a passing result, and missing image dimensions are
//! converted into an error result rather than propagated.
//!
//! Several thresholds here are deliberately loose domain approximations
//! (see the traffic light aspect-ratio band), not statistically derived.

use crate::core::models::{Annotation, CheckResult, ImageDimensions, TaskParams};

/// Percentage buckets accepted for occlusion and truncation
const PERCENT_BUCKETS: [&str; 5] = ["0%", "25%", "50%", "75%", "100%"];

/// Accepted background color categories
const BACKGROUND_COLORS: [&str; 8] = [
    "white",
    "yellow",
    "red",
    "orange",
    "green",
    "blue",
    "other",
    "not_applicable",
];

const ANNOTATION_TYPE_CHECK: &str = "Annotation Type Check";
const OCCLUSION_CHECK: &str = "Occlusion Value Check";
const TRUNCATION_CHECK: &str = "Truncation Value Check";
const BACKGROUND_COLOR_CHECK: &str = "Background Color Check";
const BOX_LABEL_CHECK: &str = "Bounding Box Label Check";
const BOX_SIZE_CHECK: &str = "Bounding Box Size Check";
const BOX_TRUNCATION_CHECK: &str = "Bounding Box Truncation Check";
const TRAFFIC_LIGHT_CHECK: &str = "Traffic Light Background Color Check";
const CONSTRUCTION_SIGN_CHECK: &str = "Construction Sign Background Color Check";
const NON_VISIBLE_FACE_CHECK: &str = "Non Visible Face Background Color Check";

/// The annotation's label must be one of the labels the task declared
#[must_use]
pub fn check_annotation_type(objects_to_annotate: &[String], annotation: &Annotation) -> CheckResult {
    if objects_to_annotate.iter().any(|l| l == &annotation.label) {
        CheckResult::success(&annotation.uuid, ANNOTATION_TYPE_CHECK)
    } else {
        CheckResult::error(
            &annotation.uuid,
            ANNOTATION_TYPE_CHECK,
            format!(
                "Annotation label: {} does not match params.objects_to_annotate",
                annotation.label
            ),
        )
    }
}

/// Occlusion must be one of the fixed percentage buckets
#[must_use]
pub fn check_occlusion(annotation: &Annotation) -> CheckResult {
    let occlusion = annotation.attributes.occlusion.as_str();
    if PERCENT_BUCKETS.contains(&occlusion) {
        CheckResult::success(&annotation.uuid, OCCLUSION_CHECK)
    } else {
        CheckResult::error(
            &annotation.uuid,
            OCCLUSION_CHECK,
            format!("Occlusion value: {occlusion} does not match the expected attribute buckets"),
        )
    }
}

/// Truncation must be one of the fixed percentage buckets
#[must_use]
pub fn check_truncation(annotation: &Annotation) -> CheckResult {
    let truncation = annotation.attributes.truncation.as_str();
    if PERCENT_BUCKETS.contains(&truncation) {
        CheckResult::success(&annotation.uuid, TRUNCATION_CHECK)
    } else {
        CheckResult::error(
            &annotation.uuid,
            TRUNCATION_CHECK,
            format!("Truncation value: {truncation} does not match the expected attribute buckets"),
        )
    }
}

/// Background color must be one of the fixed category set
#[must_use]
pub fn check_background_color(annotation: &Annotation) -> CheckResult {
    let color = annotation.attributes.background_color.as_str();
    if BACKGROUND_COLORS.contains(&color) {
        CheckResult::success(&annotation.uuid, BACKGROUND_COLOR_CHECK)
    } else {
        CheckResult::error(
            &annotation.uuid,
            BACKGROUND_COLOR_CHECK,
            format!("Background color: {color} does not match the expected color choices"),
        )
    }
}

/// Box dimensions must strictly exceed the task's declared minimums
#[must_use]
pub fn check_box_label_size(params: &TaskParams, annotation: &Annotation) -> CheckResult {
    if annotation.width <= params.min_width || annotation.height <= params.min_height {
        CheckResult::error(
            &annotation.uuid,
            BOX_LABEL_CHECK,
            format!(
                "Bounding box dimensions width: {}, height: {} do not meet minWidth: {} and minHeight: {} requirements",
                annotation.width, annotation.height, params.min_width, params.min_height
            ),
        )
    } else {
        CheckResult::success(&annotation.uuid, BOX_LABEL_CHECK)
    }
}

/// A box must not cover or exceed the full image
///
/// Fails closed when the image dimensions could not be resolved.
#[must_use]
pub fn check_box_image_size(dims: Option<ImageDimensions>, annotation: &Annotation) -> CheckResult {
    let Some(dims) = dims else {
        return unresolved_dimensions(annotation, BOX_SIZE_CHECK);
    };

    if annotation.width >= dims.width && annotation.height >= dims.height {
        CheckResult::error(
            &annotation.uuid,
            BOX_SIZE_CHECK,
            "Bounding box is equal to or larger than the provided image.".to_string(),
        )
    } else {
        CheckResult::success(&annotation.uuid, BOX_SIZE_CHECK)
    }
}

/// A box sitting on an image edge must be declared truncated
///
/// Edge coincidence is an exact-pixel condition: a box is "on an edge"
/// when `top` or `left` is 0, or `top`/`left` equals the image
/// height/width. The latter pair compares the box origin, not the far
/// edge, against the image bounds; that is the inherited rule as the
/// commissioning team specified it.
///
/// Fails closed when the image dimensions could not be resolved.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn check_box_edge_truncation(
    dims: Option<ImageDimensions>,
    annotation: &Annotation,
) -> CheckResult {
    let Some(dims) = dims else {
        return unresolved_dimensions(annotation, BOX_TRUNCATION_CHECK);
    };

    let on_edge = annotation.top == 0.0
        || annotation.left == 0.0
        || annotation.top == dims.height
        || annotation.left == dims.width;

    if on_edge {
        let truncation = annotation.truncation_percent();
        if truncation == 0.0 {
            return CheckResult::error(
                &annotation.uuid,
                BOX_TRUNCATION_CHECK,
                format!(
                    "Bounding box is on an image edge and not labeled as truncated, truncation value: {truncation}."
                ),
            );
        } else if truncation > 0.0 && truncation <= 25.0 {
            return CheckResult::warning(
                &annotation.uuid,
                BOX_TRUNCATION_CHECK,
                format!(
                    "Bounding box is on an image edge. Truncation value: {truncation} might be inaccurate."
                ),
            );
        }
    }
    CheckResult::success(&annotation.uuid, BOX_TRUNCATION_CHECK)
}

/// Traffic lights tagged `traffic_control_sign` should carry color `other`
///
/// A box with a 1:3 width-to-height ratio is taken to be a traffic light
/// and must have background color `other`. Ratios in the loose [1/4, 1/2]
/// band only warn, assuming labels are not drawn pixel-perfect.
#[must_use]
pub fn check_traffic_light_background_color(annotation: &Annotation) -> CheckResult {
    if annotation.label == "traffic_control_sign" {
        let color = annotation.attributes.background_color.as_str();
        if let Some(aspect_ratio) = annotation.aspect_ratio() {
            if (aspect_ratio - 1.0 / 3.0).abs() < f64::EPSILON {
                if color != "other" {
                    return CheckResult::error(
                        &annotation.uuid,
                        TRAFFIC_LIGHT_CHECK,
                        format!(
                            "Traffic light background color: {color} is inaccurate. Should be labeled other"
                        ),
                    );
                }
            } else if (0.25..=0.5).contains(&aspect_ratio) && color != "other" {
                return CheckResult::warning(
                    &annotation.uuid,
                    TRAFFIC_LIGHT_CHECK,
                    format!("Traffic light background color: {color} might be inaccurate"),
                );
            }
        }
    }
    CheckResult::success(&annotation.uuid, TRAFFIC_LIGHT_CHECK)
}

/// Construction signs must be labeled with an orange background
#[must_use]
pub fn check_construction_sign_background_color(annotation: &Annotation) -> CheckResult {
    if annotation.label == "construction_sign" {
        let color = annotation.attributes.background_color.as_str();
        if color != "orange" {
            return CheckResult::error(
                &annotation.uuid,
                CONSTRUCTION_SIGN_CHECK,
                format!("Construction sign background color: {color} not labeled as orange"),
            );
        }
    }
    CheckResult::success(&annotation.uuid, CONSTRUCTION_SIGN_CHECK)
}

/// Non-visible faces must carry the `not_applicable` background color
#[must_use]
pub fn check_non_visible_face_background_color(annotation: &Annotation) -> CheckResult {
    if annotation.label == "non_visible_face" {
        let color = annotation.attributes.background_color.as_str();
        if color != "not_applicable" {
            return CheckResult::error(
                &annotation.uuid,
                NON_VISIBLE_FACE_CHECK,
                format!(
                    "Non visible face background color: {color} not labeled as not_applicable"
                ),
            );
        }
    }
    CheckResult::success(&annotation.uuid, NON_VISIBLE_FACE_CHECK)
}

/// Fail-closed result for geometry checks when the probe came up empty
fn unresolved_dimensions(annotation: &Annotation, check_name: &str) -> CheckResult {
    CheckResult::error(
        &annotation.uuid,
        check_name,
        "Image dimensions could not be resolved; geometry check failed closed.".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AnnotationAttributes, Severity};

    fn annotation() -> Annotation {
        Annotation {
            uuid: "anno-1".to_string(),
            label: "information_sign".to_string(),
            top: 10.0,
            left: 10.0,
            width: 40.0,
            height: 20.0,
            attributes: AnnotationAttributes {
                occlusion: "0%".to_string(),
                truncation: "0%".to_string(),
                background_color: "white".to_string(),
            },
        }
    }

    fn params() -> TaskParams {
        TaskParams {
            objects_to_annotate: vec![
                "traffic_control_sign".to_string(),
                "construction_sign".to_string(),
                "information_sign".to_string(),
                "policy_sign".to_string(),
                "non_visible_face".to_string(),
            ],
            min_width: 10.0,
            min_height: 5.0,
            attachment: "http://img.example/a.png".to_string(),
        }
    }

    fn dims(width: u32, height: u32) -> Option<ImageDimensions> {
        Some(ImageDimensions::new(width, height))
    }

    mod annotation_type {
        use super::*;

        #[test]
        fn allowed_label_passes() {
            let result = check_annotation_type(&params().objects_to_annotate, &annotation());
            assert_eq!(result.severity, Severity::Success);
            assert_eq!(result.uuid, "anno-1");
        }

        #[test]
        fn unknown_label_errors() {
            let mut anno = annotation();
            anno.label = "billboard".to_string();
            let result = check_annotation_type(&params().objects_to_annotate, &anno);
            assert_eq!(result.severity, Severity::Error);
            assert!(result.description.contains("billboard"));
        }
    }

    mod attribute_buckets {
        use super::*;

        #[test]
        fn every_bucket_string_passes() {
            for bucket in ["0%", "25%", "50%", "75%", "100%"] {
                let mut anno = annotation();
                anno.attributes.occlusion = bucket.to_string();
                anno.attributes.truncation = bucket.to_string();
                assert_eq!(check_occlusion(&anno).severity, Severity::Success);
                assert_eq!(check_truncation(&anno).severity, Severity::Success);
            }
        }

        #[test]
        fn off_bucket_percent_errors() {
            let mut anno = annotation();
            anno.attributes.occlusion = "10%".to_string();
            anno.attributes.truncation = "10%".to_string();
            assert_eq!(check_occlusion(&anno).severity, Severity::Error);
            assert_eq!(check_truncation(&anno).severity, Severity::Error);
        }

        #[test]
        fn missing_attribute_errors() {
            let mut anno = annotation();
            anno.attributes.occlusion = String::new();
            assert_eq!(check_occlusion(&anno).severity, Severity::Error);
        }

        #[test]
        fn known_background_colors_pass() {
            for color in BACKGROUND_COLORS {
                let mut anno = annotation();
                anno.attributes.background_color = color.to_string();
                assert_eq!(check_background_color(&anno).severity, Severity::Success);
            }
        }

        #[test]
        fn unknown_background_color_errors() {
            let mut anno = annotation();
            anno.attributes.background_color = "purple".to_string();
            assert_eq!(check_background_color(&anno).severity, Severity::Error);
        }
    }

    mod box_label_size {
        use super::*;

        #[test]
        fn strictly_larger_box_passes() {
            let result = check_box_label_size(&params(), &annotation());
            assert_eq!(result.severity, Severity::Success);
        }

        #[test]
        fn width_equal_to_minimum_errors() {
            // strictly-greater rule: equality is a violation
            let mut anno = annotation();
            anno.width = 10.0;
            anno.height = 10.0;
            let result = check_box_label_size(&params(), &anno);
            assert_eq!(result.severity, Severity::Error);
        }

        #[test]
        fn undersized_height_errors() {
            let mut anno = annotation();
            anno.height = 3.0;
            assert_eq!(check_box_label_size(&params(), &anno).severity, Severity::Error);
        }
    }

    mod box_image_size {
        use super::*;

        #[test]
        fn box_inside_image_passes() {
            let result = check_box_image_size(dims(640, 480), &annotation());
            assert_eq!(result.severity, Severity::Success);
        }

        #[test]
        fn box_covering_image_errors() {
            let mut anno = annotation();
            anno.width = 100.0;
            anno.height = 100.0;
            let result = check_box_image_size(dims(100, 100), &anno);
            assert_eq!(result.severity, Severity::Error);
        }

        #[test]
        fn only_one_oversized_side_passes() {
            let mut anno = annotation();
            anno.width = 200.0;
            anno.height = 50.0;
            let result = check_box_image_size(dims(100, 100), &anno);
            assert_eq!(result.severity, Severity::Success);
        }

        #[test]
        fn unresolved_dimensions_fail_closed() {
            let result = check_box_image_size(None, &annotation());
            assert_eq!(result.severity, Severity::Error);
            assert!(result.description.contains("could not be resolved"));
        }
    }

    mod box_edge_truncation {
        use super::*;

        fn on_top_edge(truncation: &str) -> Annotation {
            let mut anno = annotation();
            anno.top = 0.0;
            anno.attributes.truncation = truncation.to_string();
            anno
        }

        #[test]
        fn edge_with_zero_truncation_errors() {
            let result = check_box_edge_truncation(dims(640, 480), &on_top_edge("0%"));
            assert_eq!(result.severity, Severity::Error);
        }

        #[test]
        fn edge_with_low_truncation_warns() {
            let result = check_box_edge_truncation(dims(640, 480), &on_top_edge("20%"));
            assert_eq!(result.severity, Severity::Warning);
        }

        #[test]
        fn edge_with_high_truncation_passes() {
            let result = check_box_edge_truncation(dims(640, 480), &on_top_edge("50%"));
            assert_eq!(result.severity, Severity::Success);
        }

        #[test]
        fn interior_box_passes_regardless_of_truncation() {
            let result = check_box_edge_truncation(dims(640, 480), &annotation());
            assert_eq!(result.severity, Severity::Success);
        }

        #[test]
        fn origin_at_image_bound_counts_as_edge() {
            let mut anno = annotation();
            anno.left = 640.0;
            anno.attributes.truncation = "0%".to_string();
            let result = check_box_edge_truncation(dims(640, 480), &anno);
            assert_eq!(result.severity, Severity::Error);
        }

        #[test]
        fn unresolved_dimensions_fail_closed() {
            let result = check_box_edge_truncation(None, &on_top_edge("50%"));
            assert_eq!(result.severity, Severity::Error);
        }
    }

    mod traffic_light {
        use super::*;

        fn traffic_light(width: f64, height: f64, color: &str) -> Annotation {
            let mut anno = annotation();
            anno.label = "traffic_control_sign".to_string();
            anno.width = width;
            anno.height = height;
            anno.attributes.background_color = color.to_string();
            anno
        }

        #[test]
        fn exact_third_with_wrong_color_errors() {
            let result = check_traffic_light_background_color(&traffic_light(10.0, 30.0, "red"));
            assert_eq!(result.severity, Severity::Error);
        }

        #[test]
        fn exact_third_with_other_passes() {
            let result = check_traffic_light_background_color(&traffic_light(10.0, 30.0, "other"));
            assert_eq!(result.severity, Severity::Success);
        }

        #[test]
        fn ratio_in_guard_band_with_wrong_color_warns() {
            let result = check_traffic_light_background_color(&traffic_light(10.0, 25.0, "red"));
            assert_eq!(result.severity, Severity::Warning);
        }

        #[test]
        fn ratio_outside_band_passes() {
            let result = check_traffic_light_background_color(&traffic_light(10.0, 10.0, "red"));
            assert_eq!(result.severity, Severity::Success);
        }

        #[test]
        fn other_labels_are_ignored() {
            let mut anno = annotation();
            anno.width = 10.0;
            anno.height = 30.0;
            anno.attributes.background_color = "red".to_string();
            let result = check_traffic_light_background_color(&anno);
            assert_eq!(result.severity, Severity::Success);
        }

        #[test]
        fn zero_height_box_passes() {
            let result = check_traffic_light_background_color(&traffic_light(10.0, 0.0, "red"));
            assert_eq!(result.severity, Severity::Success);
        }
    }

    mod sign_colors {
        use super::*;

        #[test]
        fn construction_sign_must_be_orange() {
            let mut anno = annotation();
            anno.label = "construction_sign".to_string();
            anno.attributes.background_color = "blue".to_string();
            assert_eq!(
                check_construction_sign_background_color(&anno).severity,
                Severity::Error
            );

            anno.attributes.background_color = "orange".to_string();
            assert_eq!(
                check_construction_sign_background_color(&anno).severity,
                Severity::Success
            );
        }

        #[test]
        fn non_visible_face_must_be_not_applicable() {
            let mut anno = annotation();
            anno.label = "non_visible_face".to_string();
            anno.attributes.background_color = "white".to_string();
            assert_eq!(
                check_non_visible_face_background_color(&anno).severity,
                Severity::Error
            );

            anno.attributes.background_color = "not_applicable".to_string();
            assert_eq!(
                check_non_visible_face_background_color(&anno).severity,
                Severity::Success
            );
        }

        #[test]
        fn unrelated_labels_pass_both_sign_checks() {
            let anno = annotation();
            assert_eq!(
                check_construction_sign_background_color(&anno).severity,
                Severity::Success
            );
            assert_eq!(
                check_non_visible_face_background_color(&anno).severity,
                Severity::Success
            );
        }
    }
}
