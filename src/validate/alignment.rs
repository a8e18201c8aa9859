//! Non-blocking checks on the index-aligned lists.

use crate::document::TaskDocument;

/// Describes every list whose length differs from the objective list.
///
/// Mismatches never block a step; they are surfaced as warnings.
#[must_use]
pub fn alignment_warnings(doc: &TaskDocument) -> Vec<String> {
    let objectives = doc.objective.len();
    let mut warnings = Vec::new();
    if doc.acceptance.len() != objectives {
        warnings.push(format!(
            "{} acceptance criteria sets for {objectives} objectives",
            doc.acceptance.len()
        ));
    }
    if doc.tech.step_groups.len() != objectives {
        warnings.push(format!(
            "{} technical step groups for {objectives} objectives",
            doc.tech.step_groups.len()
        ));
    }
    warnings
}
