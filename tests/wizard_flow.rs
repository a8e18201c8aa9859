//! End-to-end wizard behavior through the public library API.

use taskwiz::document::{FieldKey, TaskDocument, UiSpec};
use taskwiz::render::Dialect;
use taskwiz::session::{Transition, WizardSession};
use taskwiz::validate::{evaluate, Strictness, ValidationEngine};
use taskwiz::wizard::{ProgressBand, Step, WizardState};

#[test]
fn navigation_never_leaves_the_catalog() {
    let mut wizard = WizardState::new();
    for _ in 0..10 {
        wizard.retreat();
    }
    assert_eq!(wizard.current_step(), 0);
    for _ in 0..10 {
        wizard.advance();
    }
    assert_eq!(wizard.current_step(), Step::COUNT - 1);
    assert_eq!(wizard.progress_percentage(), 100);
    assert_eq!(wizard.progress_band(), ProgressBand::High);
}

#[test]
fn lenient_accepts_everything_strict_accepts() {
    let mut docs = vec![TaskDocument::empty(), TaskDocument::sample()];
    let mut short = TaskDocument::sample();
    short.objective[0] = "abc".to_string();
    docs.push(short);

    for doc in &docs {
        for key in FieldKey::ALL {
            if evaluate(doc, key, Strictness::Strict).is_valid() {
                assert!(evaluate(doc, key, Strictness::Lenient).is_valid(), "{key}");
            }
        }
    }
}

#[test]
fn ui_errors_are_replaced_on_each_validation() {
    let mut doc = TaskDocument::empty();
    doc.ui = Some(vec![
        UiSpec { name: "Login".to_string(), ..UiSpec::default() },
        UiSpec { name: "Home".to_string(), ..UiSpec::default() },
    ]);
    let mut engine = ValidationEngine::new(Strictness::Lenient);
    engine.validate_step(&doc, FieldKey::Ui);
    assert!(!engine.ui_item_error(1).is_empty());

    doc.ui = Some(vec![UiSpec { name: "Login".to_string(), ..UiSpec::default() }]);
    engine.validate_step(&doc, FieldKey::Ui);
    assert!(!engine.ui_item_error(0).is_empty());
    assert!(engine.ui_item_error(1).is_empty());
    assert!(engine.ui_design_error(1).is_empty());
}

#[test]
fn fixing_a_blocked_step_lets_the_session_continue() {
    let mut doc = TaskDocument::sample();
    doc.ui = None;
    doc.tech.repository = "not a url".to_string();
    let mut session = WizardSession::with_document(doc, Strictness::Strict);

    assert!(matches!(
        session.run_to_end(),
        Transition::Blocked { step: Step::TechnicalSpecification, .. }
    ));
    session.document_mut().tech.repository = "https://github.com/company/auth-system".to_string();
    assert_eq!(session.run_to_end(), Transition::Completed);

    let content = session.finish(Dialect::Markdown).unwrap();
    assert!(content.contains("Technical Steps"));
}
