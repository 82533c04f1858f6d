//! Route templates for span names and metric labels.

use uuid::Uuid;

/// Replace id segments so every hook shares one route label, e.g.
/// `/hooks/0190.../signing-key` becomes `/hooks/{id}/signing-key`.
pub(super) fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}
