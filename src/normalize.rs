//! Orchestration of the two normalization stages.

use tracing::trace;

use crate::shape::format_shape;
use crate::strip::strip_sections;

/// Normalize an issue description.
///
/// Strips "Acceptance Criteria" and "Success Metrics" sections, then shapes
/// the result around the leading user-story sentence. Absent or empty input
/// is returned unchanged. The transformation never fails and is idempotent:
/// running it on its own output yields the same text.
#[must_use]
pub fn process(description: Option<&str>) -> Option<String> {
    let text = description?;
    if text.is_empty() {
        return Some(String::new());
    }

    trace!(len = text.len(), "normalizing description");
    Some(format_shape(&strip_sections(text)))
}
