//! Wizard navigation state.

use tracing::debug;

use super::catalog::Step;
use super::progress::ProgressBand;
use crate::document::TaskDocument;

/// Current step index, the document being edited and the "copied" flag.
///
/// Navigation never validates; callers gate [`advance`](Self::advance) on
/// the validation verdict for the current step.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    index: usize,
    document: TaskDocument,
    copied: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Starts at the first step with the canonical empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::with_document(TaskDocument::empty())
    }

    /// Starts at the first step editing `document`.
    #[must_use]
    pub fn with_document(document: TaskDocument) -> Self {
        Self { index: 0, document, copied: false }
    }

    /// 0-based index; equals [`Step::COUNT`] once completed.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.index
    }

    /// The active step, `None` once completed.
    #[must_use]
    pub fn step(&self) -> Option<Step> {
        Step::at(self.index)
    }

    /// Moves one step forward, saturating at the last step.
    pub fn advance(&mut self) {
        if self.index + 1 < Step::COUNT {
            self.index += 1;
            debug!(step = self.index, "advanced");
        }
    }

    /// Moves one step back, saturating at the first step.
    pub fn retreat(&mut self) {
        if self.index > 0 {
            self.index = (self.index - 1).min(Step::COUNT - 1);
            debug!(step = self.index, "retreated");
        }
    }

    /// Moves past the last step into the finished state.
    pub fn complete(&mut self) {
        self.index = Step::COUNT;
        debug!("wizard completed");
    }

    /// Returns `true` on the first step.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns `true` on the last step (not once finished).
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index == Step::COUNT - 1
    }

    /// Returns `true` once the wizard has been completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.index >= Step::COUNT
    }

    /// Back to the first step with an empty document and the copied flag cleared.
    pub fn reset(&mut self) {
        self.index = 0;
        self.document = TaskDocument::empty();
        self.copied = false;
        debug!("wizard reset");
    }

    /// Re-enters the wizard at the first step, keeping the document.
    pub fn jump_to_edit(&mut self) {
        self.index = 0;
    }

    /// The document being edited.
    #[must_use]
    pub fn document(&self) -> &TaskDocument {
        &self.document
    }

    /// Mutable access for input bindings.
    pub fn document_mut(&mut self) -> &mut TaskDocument {
        &mut self.document
    }

    /// Whether the export was copied.
    #[must_use]
    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Records whether the export was copied.
    pub fn set_copied(&mut self, copied: bool) {
        self.copied = copied;
    }

    /// Rounded percentage of steps reached, counting the current one.
    #[must_use]
    pub fn progress_percentage(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = self.progress().round() as u8;
        rounded
    }

    /// Colour band of the current progress.
    #[must_use]
    pub fn progress_band(&self) -> ProgressBand {
        ProgressBand::for_progress(self.progress())
    }

    #[allow(clippy::cast_precision_loss)]
    fn progress(&self) -> f64 {
        let reached = self.index.min(Step::COUNT - 1) + 1;
        reached as f64 * 100.0 / Step::COUNT as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize) -> WizardState {
        let mut state = WizardState::new();
        for _ in 0..index {
            state.advance();
        }
        state
    }

    #[test]
    fn starts_at_first_step_with_empty_document() {
        let state = WizardState::new();
        assert_eq!(state.current_step(), 0);
        assert_eq!(state.step(), Some(Step::Objective));
        assert!(state.is_first());
        assert_eq!(state.document(), &TaskDocument::empty());
    }

    #[test]
    fn advance_saturates_at_last_step() {
        let mut state = at(10);
        assert_eq!(state.current_step(), 4);
        assert!(state.is_last());
        assert!(!state.is_complete());
        state.advance();
        assert_eq!(state.current_step(), 4);
    }

    #[test]
    fn retreat_saturates_at_first_step() {
        let mut state = at(1);
        state.retreat();
        state.retreat();
        assert_eq!(state.current_step(), 0);
    }

    #[test]
    fn complete_distinguishes_last_from_finished() {
        let mut state = at(4);
        state.complete();
        assert!(state.is_complete());
        assert!(!state.is_last());
        assert_eq!(state.step(), None);
        state.retreat();
        assert_eq!(state.step(), Some(Step::UiSpecification));
    }

    #[test]
    fn progress_counts_the_current_step() {
        assert_eq!(at(0).progress_percentage(), 20);
        assert_eq!(at(2).progress_percentage(), 60);
        assert_eq!(at(4).progress_percentage(), 100);
        let mut done = at(4);
        done.complete();
        assert_eq!(done.progress_percentage(), 100);
    }

    #[test]
    fn progress_band_follows_thresholds() {
        assert_eq!(at(0).progress_band(), ProgressBand::Low);
        assert_eq!(at(1).progress_band(), ProgressBand::Medium);
        assert_eq!(at(2).progress_band(), ProgressBand::Medium);
        assert_eq!(at(3).progress_band(), ProgressBand::High);
    }

    #[test]
    fn reset_restores_empty_shape_and_clears_copied() {
        let mut state = WizardState::with_document(TaskDocument::sample());
        state.advance();
        state.set_copied(true);
        state.reset();
        assert_eq!(state.current_step(), 0);
        assert_eq!(state.document(), &TaskDocument::empty());
        assert!(!state.copied());
    }

    #[test]
    fn jump_to_edit_keeps_document() {
        let mut state = WizardState::with_document(TaskDocument::sample());
        state.complete();
        state.jump_to_edit();
        assert_eq!(state.current_step(), 0);
        assert_eq!(state.document(), &TaskDocument::sample());
    }
}
