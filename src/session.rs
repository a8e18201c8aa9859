//! Wizard session: the single owner of navigation, validation and preview state.
//!
//! Replaces any process-wide state. Whoever drives the wizard constructs
//! one session and passes it where it is needed.

use tracing::{debug, info};

use crate::document::{FieldKey, TaskDocument};
use crate::render::{Dialect, Serializer};
use crate::validate::{Strictness, ValidationEngine, Verdict};
use crate::wizard::{Step, WizardState};

/// Export preview shown once the wizard is finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPreview {
    visible: bool,
    content: String,
    copied: bool,
}

impl ExportPreview {
    /// Shows `content`, clearing the copied flag.
    pub fn open(&mut self, content: String) {
        self.content = content;
        self.copied = false;
        self.visible = true;
    }

    /// Hides the preview; the content stays available.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Records whether the content was copied.
    pub fn set_copied(&mut self, copied: bool) {
        self.copied = copied;
    }

    /// Whether the preview is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rendered export text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the content was copied.
    #[must_use]
    pub fn copied(&self) -> bool {
        self.copied
    }
}

/// Outcome of asking the session to move forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Moved to the given step.
    Advanced(Step),
    /// Left the last step; the wizard is finished.
    Completed,
    /// The current step failed validation.
    Blocked {
        /// Step that failed.
        step: Step,
        /// Stored step message.
        message: String,
    },
    /// The wizard was already finished.
    AlreadyComplete,
}

/// Wizard state plus the validation engine gating it.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    wizard: WizardState,
    engine: ValidationEngine,
    preview: ExportPreview,
}

impl WizardSession {
    /// New session on the canonical empty document.
    #[must_use]
    pub fn new(strictness: Strictness) -> Self {
        Self::with_document(TaskDocument::empty(), strictness)
    }

    /// New session editing `document`.
    #[must_use]
    pub fn with_document(document: TaskDocument, strictness: Strictness) -> Self {
        Self {
            wizard: WizardState::with_document(document),
            engine: ValidationEngine::new(strictness),
            preview: ExportPreview::default(),
        }
    }

    /// Navigation state.
    #[must_use]
    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    /// Validation engine and its stored errors.
    #[must_use]
    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    /// Export preview.
    #[must_use]
    pub fn preview(&self) -> &ExportPreview {
        &self.preview
    }

    /// Mutable export preview, for close and copy actions.
    pub fn preview_mut(&mut self) -> &mut ExportPreview {
        &mut self.preview
    }

    /// The document being edited.
    #[must_use]
    pub fn document(&self) -> &TaskDocument {
        self.wizard.document()
    }

    /// Mutable document for input bindings.
    pub fn document_mut(&mut self) -> &mut TaskDocument {
        self.wizard.document_mut()
    }

    /// Validates the active step and stores the result.
    ///
    /// Returns `None` once the wizard is finished.
    pub fn validate_current(&mut self) -> Option<Verdict> {
        let step = self.wizard.step()?;
        Some(self.engine.validate_step(self.wizard.document(), step.key()))
    }

    /// Validates the active step and moves forward only if it may proceed.
    ///
    /// On the last step a passing validation completes the wizard.
    pub fn next(&mut self) -> Transition {
        let Some(step) = self.wizard.step() else {
            return Transition::AlreadyComplete;
        };
        let key = step.key();
        self.engine.validate_step(self.wizard.document(), key);
        if !self.engine.can_proceed(self.wizard.document(), key) {
            let message = self.engine.field_error(key).to_string();
            debug!(step = %step, %message, "step blocked");
            return Transition::Blocked { step, message };
        }
        if self.wizard.is_last() {
            self.wizard.complete();
            return Transition::Completed;
        }
        self.wizard.advance();
        match self.wizard.step() {
            Some(next) => Transition::Advanced(next),
            None => Transition::Completed,
        }
    }

    /// Moves one step back without validating.
    pub fn back(&mut self) {
        self.wizard.retreat();
    }

    /// Runs [`next`](Self::next) until the wizard finishes or a step blocks.
    pub fn run_to_end(&mut self) -> Transition {
        loop {
            match self.next() {
                Transition::Advanced(_) => {}
                other => return other,
            }
        }
    }

    /// Validates every step and, if all pass, completes the wizard and
    /// opens the preview with the rendered export.
    ///
    /// Returns the first blocking step otherwise. Notes never block.
    pub fn finish(&mut self, dialect: Dialect) -> Result<&str, Transition> {
        for (key, _) in self.engine.validate_all(self.wizard.document()) {
            if let Some(step) = Step::for_key(key) {
                if !self.engine.can_proceed(self.wizard.document(), key) {
                    return Err(Transition::Blocked {
                        step,
                        message: self.engine.field_error(key).to_string(),
                    });
                }
            }
        }
        self.wizard.complete();
        let rendered = Serializer::new(dialect).render(self.wizard.document());
        info!(%dialect, length = rendered.len(), "task document exported");
        self.preview.open(rendered);
        Ok(self.preview.content())
    }

    /// Re-enters a finished wizard at the first step, keeping the document.
    pub fn edit(&mut self) {
        self.wizard.jump_to_edit();
        self.preview.close();
    }

    /// Starts over: first step, empty document, no errors, preview cleared.
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.engine.clear();
        self.preview = ExportPreview::default();
    }

    /// Current message for `key`, empty when none.
    #[must_use]
    pub fn field_error(&self, key: FieldKey) -> &str {
        self.engine.field_error(key)
    }
}
