//! `taskwiz validate` command.

use crate::document::{FieldKey, TaskDocument};
use crate::store::DraftStore;
use crate::validate::{alignment_warnings, Strictness, ValidationEngine, Verdict};
use crate::wizard::Step;

/// Validates one field, or all of them, and prints a report.
///
/// # Errors
///
/// Returns an error string if the draft cannot be loaded or a gating
/// field fails. A notes failure is reported but does not fail the command.
pub fn run(
    store: &DraftStore<'_>,
    id: &str,
    step: Option<FieldKey>,
    strictness: Strictness,
) -> Result<(), String> {
    let doc = store.load(id).map_err(|e| e.to_string())?;
    let mut engine = ValidationEngine::new(strictness);
    let results = match step {
        Some(key) => vec![(key, engine.validate_step(&doc, key))],
        None => engine.validate_all(&doc),
    };

    println!("{}", format_report(id, &doc, &engine, &results));

    if passed(&results) {
        Ok(())
    } else {
        Err(format!("draft {id} failed validation"))
    }
}

/// Returns `true` when every gating field in `results` is valid.
#[must_use]
pub fn passed(results: &[(FieldKey, Verdict)]) -> bool {
    results.iter().all(|(key, verdict)| *key == FieldKey::Notes || verdict.is_valid())
}

/// Formats validation results as a human-readable report.
#[must_use]
pub fn format_report(
    id: &str,
    doc: &TaskDocument,
    engine: &ValidationEngine,
    results: &[(FieldKey, Verdict)],
) -> String {
    let mut lines = vec![format!("Draft: {id} ({} mode)", engine.strictness()), String::new()];

    for (key, verdict) in results {
        let title = Step::for_key(*key).map_or("Notes", Step::label);
        match verdict {
            Verdict::Valid => lines.push(format!("  [PASS] {title}")),
            Verdict::Invalid(violation) => {
                let status = if *key == FieldKey::Notes { "WARN" } else { "FAIL" };
                lines.push(format!("  [{status}] {title}"));
                lines.push(format!("         {}", violation.message));
                for item in &violation.items {
                    lines.push(format!("         - {}", engine.ui_item_error(item.index)));
                }
            }
        }
    }

    let warnings = alignment_warnings(doc);
    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        for warning in &warnings {
            lines.push(format!("  - {warning}"));
        }
    }

    lines.push(String::new());
    let overall = if passed(results) { "PASSED" } else { "FAILED" };
    lines.push(format!("Result: {overall}"));
    lines.join("\n")
}
