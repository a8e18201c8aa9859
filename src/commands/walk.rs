//! `taskwiz walk` command.

use crate::session::{Transition, WizardSession};
use crate::store::DraftStore;
use crate::validate::Strictness;

/// Steps the wizard through a draft, printing each transition.
///
/// # Errors
///
/// Returns an error string if the draft cannot be loaded or a step blocks.
pub fn run(store: &DraftStore<'_>, id: &str, strictness: Strictness) -> Result<(), String> {
    let doc = store.load(id).map_err(|e| e.to_string())?;
    let mut session = WizardSession::with_document(doc, strictness);
    let (lines, outcome) = walk(&mut session);
    for line in &lines {
        println!("{line}");
    }
    match outcome {
        Transition::Blocked { step, message } => Err(format!("blocked at {step}: {message}")),
        _ => Ok(()),
    }
}

/// Advances `session` until it completes or blocks, collecting one line
/// per step visited.
pub fn walk(session: &mut WizardSession) -> (Vec<String>, Transition) {
    let mut lines = Vec::new();
    loop {
        let wizard = session.wizard();
        let Some(step) = wizard.step() else {
            return (lines, Transition::AlreadyComplete);
        };
        let header = format!(
            "[{:>3}%] Step {}: {}",
            wizard.progress_percentage(),
            step.index() + 1,
            step.label()
        );
        let transition = session.next();
        match &transition {
            Transition::Advanced(_) => lines.push(format!("{header}  ok")),
            Transition::Completed => {
                lines.push(format!("{header}  ok"));
                lines.push("Complete. Run `taskwiz render` to export.".to_string());
                return (lines, transition);
            }
            Transition::Blocked { message, .. } => {
                lines.push(format!("{header}  blocked: {message}"));
                return (lines, transition);
            }
            Transition::AlreadyComplete => return (lines, transition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TaskDocument;
    use crate::wizard::Step;

    #[test]
    fn sample_without_images_blocks_on_ui() {
        let mut session = WizardSession::with_document(TaskDocument::sample(), Strictness::Strict);
        let (lines, outcome) = walk(&mut session);
        assert!(matches!(outcome, Transition::Blocked { step: Step::UiSpecification, .. }));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "[ 20%] Step 1: Objective  ok");
        assert_eq!(
            lines[4],
            "[100%] Step 5: UI Specification  blocked: Please fix the validation errors above"
        );
    }

    #[test]
    fn lenient_walk_completes_empty_document() {
        let mut session = WizardSession::new(Strictness::Lenient);
        let (lines, outcome) = walk(&mut session);
        assert_eq!(outcome, Transition::Completed);
        assert_eq!(lines.len(), 6);
        assert!(lines[3].starts_with("[ 80%] Step 4: API Specification"));
        assert!(session.wizard().is_complete());
    }

    #[test]
    fn empty_document_blocks_on_first_step() {
        let mut session = WizardSession::new(Strictness::Strict);
        let (lines, outcome) = walk(&mut session);
        assert!(matches!(outcome, Transition::Blocked { step: Step::Objective, .. }));
        assert_eq!(
            lines,
            vec!["[ 20%] Step 1: Objective  blocked: At least one objective is required"]
        );
    }
}
