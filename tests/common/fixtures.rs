//! Task and annotation builders for tests

use annolint::core::models::{Annotation, AnnotationAttributes, Task, TaskParams, TaskResponse};

pub const IMAGE_URL: &str = "http://img.example/street.png";

/// The label set used by the traffic sign project
pub fn sign_labels() -> Vec<String> {
    [
        "traffic_control_sign",
        "construction_sign",
        "information_sign",
        "policy_sign",
        "non_visible_face",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// An annotation that passes every check (given a 640x480 image)
pub fn clean_annotation(uuid: &str) -> Annotation {
    Annotation {
        uuid: uuid.to_string(),
        label: "information_sign".to_string(),
        top: 50.0,
        left: 50.0,
        width: 40.0,
        height: 20.0,
        attributes: AnnotationAttributes {
            occlusion: "0%".to_string(),
            truncation: "0%".to_string(),
            background_color: "white".to_string(),
        },
    }
}

/// A task over the standard image with the given annotations
pub fn task(task_id: &str, annotations: Vec<Annotation>) -> Task {
    Task {
        task_id: task_id.to_string(),
        params: TaskParams {
            objects_to_annotate: sign_labels(),
            min_width: 10.0,
            min_height: 5.0,
            attachment: IMAGE_URL.to_string(),
        },
        response: Some(TaskResponse {
            annotations: Some(annotations),
        }),
    }
}
