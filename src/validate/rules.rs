//! Per-field validation rules.
//!
//! Each rule scans its field in a fixed order and keeps only the first
//! specific problem. Bound and format failures with no specific message
//! fall back to a generic one.

use url::Url;

use super::outcome::{ItemViolation, Strictness, UiField, Verdict, Violation, ViolationKind};
use crate::document::{
    is_blank, trimmed_len, AcceptanceCriteria, ApiSpec, FieldKey, TaskDocument, TechSpec, UiSpec,
};

/// Minimum trimmed length of an objective.
pub const OBJECTIVE_MIN: usize = 5;
/// Minimum trimmed length of a Given/When/Then condition.
pub const CONDITION_MIN: usize = 3;
/// Minimum trimmed length of a technical step.
pub const STEP_MIN: usize = 3;

const OBJECTIVE_MAX: usize = 500;
const STEP_MAX: usize = 500;
const FILE_REFERENCE_MAX: usize = 200;
const EPIC_BRANCH_MAX: usize = 200;
const ACCOUNT_MAX: usize = 200;
const UI_NAME_MAX: usize = 200;
const UI_NOTE_MAX: usize = 300;
const NOTES_MAX: usize = 1000;

const GENERIC_FAILURE: &str = "Validation failed";

/// Validates one field of `doc` without touching any stored state.
#[must_use]
pub fn evaluate(doc: &TaskDocument, key: FieldKey, strictness: Strictness) -> Verdict {
    match key {
        FieldKey::Objective => objective(&doc.objective, strictness),
        FieldKey::Acceptance => acceptance(&doc.acceptance, strictness),
        FieldKey::Tech => tech(&doc.tech, strictness),
        FieldKey::Api => api(doc.api_specs()),
        FieldKey::Ui => ui(doc.ui_specs()),
        FieldKey::Notes => notes(&doc.notes),
    }
}

/// Keeps the first specific message and remembers whether any bound failed.
#[derive(Default)]
struct FirstFound {
    message: Option<String>,
    shape_failed: bool,
}

impl FirstFound {
    fn content(&mut self, message: impl FnOnce() -> String) {
        if self.message.is_none() {
            self.message = Some(message());
        }
    }

    fn shape(&mut self, failed: bool) {
        self.shape_failed |= failed;
    }

    fn finish(self, fallback: &str) -> Verdict {
        match (self.message, self.shape_failed) {
            (Some(message), _) => Verdict::Invalid(Violation::new(ViolationKind::Content, message)),
            (None, true) => Verdict::Invalid(Violation::new(ViolationKind::Shape, fallback)),
            (None, false) => Verdict::Valid,
        }
    }
}

fn too_long(text: &str, max: usize) -> bool {
    text.chars().count() > max
}

fn too_short(text: &str, min: usize) -> bool {
    !is_blank(text) && trimmed_len(text) < min
}

fn bad_url(text: &str) -> bool {
    !is_blank(text) && Url::parse(text.trim()).is_err()
}

fn objective(entries: &[String], strictness: Strictness) -> Verdict {
    let mut found = FirstFound::default();

    if strictness.is_strict() {
        if entries.iter().all(|entry| is_blank(entry)) {
            found.content(|| "At least one objective is required".to_string());
        } else if entries.iter().any(|entry| trimmed_len(entry) < OBJECTIVE_MIN) {
            found.content(|| "Each objective must be at least 5 characters long".to_string());
        }
    } else if entries.iter().any(|entry| too_short(entry, OBJECTIVE_MIN)) {
        found.content(|| "Each objective must be at least 5 characters long".to_string());
    }

    found.shape(entries.iter().any(|entry| too_long(entry, OBJECTIVE_MAX)));
    found.finish("Please fill in all objectives")
}

fn acceptance(criteria: &[AcceptanceCriteria], strictness: Strictness) -> Verdict {
    let mut found = FirstFound::default();
    let strict = strictness.is_strict();

    found.shape(strict && criteria.is_empty());

    for (i, entry) in criteria.iter().enumerate() {
        let n = i + 1;
        if strict {
            for (label, items) in entry.clauses() {
                if !items.iter().any(|item| trimmed_len(item) >= CONDITION_MIN) {
                    found.content(|| format!("At least one {label} condition is required for criteria {n}"));
                }
            }
        }
        for (label, items) in entry.clauses() {
            for (j, item) in items.iter().enumerate() {
                if too_short(item, CONDITION_MIN) {
                    found.content(|| {
                        format!("{label} condition {} in criteria {n} must be at least 3 characters", j + 1)
                    });
                }
                found.shape(strict && is_blank(item));
            }
        }
    }

    found.finish(GENERIC_FAILURE)
}

fn tech(spec: &TechSpec, strictness: Strictness) -> Verdict {
    let mut found = FirstFound::default();
    let strict = strictness.is_strict();

    if strict {
        if is_blank(&spec.repository) {
            found.content(|| "Repository URL is required".to_string());
        }
        if is_blank(&spec.page) {
            found.content(|| "Page URL is required".to_string());
        }
        if is_blank(&spec.account) {
            found.content(|| "Account is required".to_string());
        }
        found.shape(spec.step_groups.is_empty());
    }

    for (g, group) in spec.step_groups.iter().enumerate() {
        let n = g + 1;
        if strict && !group.steps.iter().any(|step| trimmed_len(&step.step) >= STEP_MIN) {
            found.content(|| format!("At least one technical step is required for objective {n}"));
        }
        for (j, step) in group.steps.iter().enumerate() {
            if too_short(&step.step, STEP_MIN) {
                found.content(|| {
                    format!("Technical step {} in objective {n} must be at least 3 characters", j + 1)
                });
            }
            found.shape(strict && is_blank(&step.step));
            found.shape(too_long(&step.step, STEP_MAX));
            found.shape(too_long(&step.file_reference, FILE_REFERENCE_MAX));
        }
    }

    found.shape(bad_url(&spec.figma));
    found.shape(bad_url(&spec.repository));
    found.shape(bad_url(&spec.page));
    found.shape(too_long(&spec.epic_branch, EPIC_BRANCH_MAX));
    found.shape(too_long(&spec.account, ACCOUNT_MAX));

    found.finish(GENERIC_FAILURE)
}

fn api(specs: &[ApiSpec]) -> Verdict {
    let mut found = FirstFound::default();

    for (i, spec) in specs.iter().enumerate() {
        if !spec.has_any_field() {
            continue;
        }
        for (label, value) in spec.leaves() {
            if is_blank(value) {
                found.content(|| format!("{label} is required for API specification {}", i + 1));
            }
        }
        found.shape(bad_url(&spec.endpoint_url));
    }

    found.finish(GENERIC_FAILURE)
}

fn ui(specs: &[UiSpec]) -> Verdict {
    let mut items = Vec::new();
    let mut shape_failed = false;

    for (index, spec) in specs.iter().enumerate() {
        let n = index + 1;
        match (spec.has_name(), spec.has_design()) {
            (true, false) => items.push(ItemViolation {
                index,
                field: UiField::Design,
                message: format!(
                    "Design image is required when UI name is provided for UI specification {n}"
                ),
                field_message: "Design image is required when UI name is provided".to_string(),
            }),
            (false, true) => items.push(ItemViolation {
                index,
                field: UiField::Name,
                message: format!(
                    "UI name is required when design image is provided for UI specification {n}"
                ),
                field_message: "UI name is required when design image is provided".to_string(),
            }),
            _ => {}
        }
        shape_failed |= too_long(&spec.name, UI_NAME_MAX) || too_long(&spec.note, UI_NOTE_MAX);
    }

    if !items.is_empty() {
        return Verdict::Invalid(Violation {
            kind: ViolationKind::ConditionalPair,
            message: "Please fix the validation errors above".to_string(),
            items,
        });
    }
    if shape_failed {
        return Verdict::Invalid(Violation::new(ViolationKind::Shape, GENERIC_FAILURE));
    }
    Verdict::Valid
}

fn notes(text: &str) -> Verdict {
    if too_long(text, NOTES_MAX) {
        Verdict::Invalid(Violation::new(
            ViolationKind::Content,
            "Additional notes must be less than 1000 characters",
        ))
    } else {
        Verdict::Valid
    }
}
