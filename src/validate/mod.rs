//! Step validation.
//!
//! [`evaluate`] is a pure function of document, field and strictness.
//! [`ValidationEngine`] wraps it with the stored error state a renderer
//! reads, and answers whether the wizard may move past a step.

mod alignment;
mod errors;
mod outcome;
mod rules;

pub use alignment::alignment_warnings;
pub use errors::{UiFieldErrors, ValidationErrorState};
pub use outcome::{ItemViolation, Strictness, UiField, Verdict, Violation, ViolationKind};
pub use rules::{evaluate, CONDITION_MIN, OBJECTIVE_MIN, STEP_MIN};

use tracing::debug;

use crate::document::{FieldKey, TaskDocument};

/// Validates steps under one strictness mode and keeps the resulting errors.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    strictness: Strictness,
    errors: ValidationErrorState,
}

impl ValidationEngine {
    /// Creates an engine with no stored errors.
    #[must_use]
    pub fn new(strictness: Strictness) -> Self {
        Self { strictness, errors: ValidationErrorState::default() }
    }

    /// Active strictness mode.
    #[must_use]
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Validates `key` and stores the outcome.
    ///
    /// Calling it twice on an unchanged document leaves the same state.
    pub fn validate_step(&mut self, doc: &TaskDocument, key: FieldKey) -> Verdict {
        let verdict = evaluate(doc, key, self.strictness);
        if matches!(key, FieldKey::Acceptance | FieldKey::Tech) {
            for warning in alignment_warnings(doc) {
                debug!(field = %key, "{warning}");
            }
        }
        debug!(field = %key, mode = %self.strictness, valid = verdict.is_valid(), "validated step");
        self.errors.record(key, &verdict);
        verdict
    }

    /// Validates every field in document order.
    pub fn validate_all(&mut self, doc: &TaskDocument) -> Vec<(FieldKey, Verdict)> {
        FieldKey::ALL.into_iter().map(|key| (key, self.validate_step(doc, key))).collect()
    }

    /// Whether the wizard may move past `key`.
    ///
    /// A stored error always blocks, even if the document has since been
    /// fixed; re-validate first. Notes never block.
    #[must_use]
    pub fn can_proceed(&self, doc: &TaskDocument, key: FieldKey) -> bool {
        if key == FieldKey::Notes {
            return true;
        }
        !self.errors.has_error(key) && evaluate(doc, key, self.strictness).is_valid()
    }

    /// Current message for `key`, empty when none.
    #[must_use]
    pub fn field_error(&self, key: FieldKey) -> &str {
        self.errors.field_error(key)
    }

    /// Entry-level message for UI entry `index`.
    #[must_use]
    pub fn ui_item_error(&self, index: usize) -> &str {
        self.errors.ui_item_error(index)
    }

    /// Name message for UI entry `index`.
    #[must_use]
    pub fn ui_name_error(&self, index: usize) -> &str {
        self.errors.ui_name_error(index)
    }

    /// Design message for UI entry `index`.
    #[must_use]
    pub fn ui_design_error(&self, index: usize) -> &str {
        self.errors.ui_design_error(index)
    }

    /// Read-only view of every stored error.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrorState {
        &self.errors
    }

    /// Drops every stored error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::UiSpec;

    fn short_objective() -> TaskDocument {
        let mut doc = TaskDocument::sample();
        doc.objective = vec!["short".to_string(), "tiny".to_string()];
        doc
    }

    #[test]
    fn stored_error_blocks_until_revalidated() {
        let mut engine = ValidationEngine::new(Strictness::Strict);
        let mut doc = short_objective();
        assert!(!engine.validate_step(&doc, FieldKey::Objective).is_valid());

        doc.objective = vec!["Implement login flow".to_string()];
        assert!(!engine.can_proceed(&doc, FieldKey::Objective));

        assert!(engine.validate_step(&doc, FieldKey::Objective).is_valid());
        assert!(engine.can_proceed(&doc, FieldKey::Objective));
    }

    #[test]
    fn can_proceed_also_checks_current_content() {
        let engine = ValidationEngine::new(Strictness::Strict);
        assert!(!engine.can_proceed(&short_objective(), FieldKey::Objective));
    }

    #[test]
    fn validation_is_idempotent() {
        let mut engine = ValidationEngine::new(Strictness::Strict);
        let mut doc = short_objective();
        doc.ui = Some(vec![UiSpec { name: "Login".to_string(), ..UiSpec::default() }]);

        let first = engine.validate_all(&doc);
        let state = engine.errors().clone();
        let second = engine.validate_all(&doc);
        assert_eq!(first, second);
        assert_eq!(&state, engine.errors());
    }

    #[test]
    fn ui_errors_are_exposed_through_getters() {
        let mut engine = ValidationEngine::new(Strictness::Lenient);
        let mut doc = TaskDocument::empty();
        doc.ui = Some(vec![UiSpec::default(), UiSpec { name: "Login".to_string(), ..UiSpec::default() }]);
        engine.validate_step(&doc, FieldKey::Ui);
        assert_eq!(engine.field_error(FieldKey::Ui), "Please fix the validation errors above");
        assert_eq!(engine.ui_design_error(1), "Design image is required when UI name is provided");
        assert_eq!(engine.ui_name_error(1), "");
        assert!(engine.ui_item_error(1).ends_with("UI specification 2"));
        assert_eq!(engine.ui_item_error(0), "");
    }

    #[test]
    fn notes_never_block() {
        let mut engine = ValidationEngine::new(Strictness::Strict);
        let mut doc = TaskDocument::empty();
        doc.notes = "n".repeat(2000);
        assert!(!engine.validate_step(&doc, FieldKey::Notes).is_valid());
        assert!(!engine.field_error(FieldKey::Notes).is_empty());
        assert!(engine.can_proceed(&doc, FieldKey::Notes));
    }

    #[test]
    fn lenient_accepts_the_empty_document() {
        let mut engine = ValidationEngine::new(Strictness::Lenient);
        let doc = TaskDocument::empty();
        for (key, verdict) in engine.validate_all(&doc) {
            assert!(verdict.is_valid(), "{key}");
        }
        assert!(engine.errors().is_empty());
    }

    #[test]
    fn strict_rejects_the_empty_document_up_front() {
        let mut engine = ValidationEngine::new(Strictness::Strict);
        let doc = TaskDocument::empty();
        let verdict = engine.validate_step(&doc, FieldKey::Objective);
        assert_eq!(verdict.message(), Some("At least one objective is required"));
    }
}
