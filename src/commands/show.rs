//! `taskwiz show` command.

use crate::document::{is_blank, Design, TaskDocument};
use crate::store::DraftStore;
use crate::validate::{evaluate, Strictness};
use crate::wizard::Step;

/// Prints a draft summary followed by per-step status.
///
/// # Errors
///
/// Returns an error string if the draft cannot be loaded.
pub fn run(store: &DraftStore<'_>, id: &str, strictness: Strictness) -> Result<(), String> {
    let doc = store.load(id).map_err(|e| e.to_string())?;
    println!("Draft: {id}");
    print_document(&doc);
    println!("\nSteps ({strictness}):");
    for line in step_status(&doc, strictness) {
        println!("  {line}");
    }
    Ok(())
}

/// One status line per wizard step.
#[must_use]
pub fn step_status(doc: &TaskDocument, strictness: Strictness) -> Vec<String> {
    let width = Step::ALL.iter().map(|s| s.label().len()).max().unwrap_or(0);
    Step::ALL
        .into_iter()
        .map(|step| {
            let status = match evaluate(doc, step.key(), strictness).message() {
                None => "ok".to_string(),
                Some(message) => message.to_string(),
            };
            format!("{}. {:<width$}  {status}", step.index() + 1, step.label())
        })
        .collect()
}

fn print_document(doc: &TaskDocument) {
    println!("\nObjectives:");
    for (i, objective) in doc.objective.iter().enumerate() {
        println!("  {}. {}", i + 1, display(objective));
    }

    println!("\nAcceptance criteria sets: {}", doc.acceptance.len());
    let steps: usize = doc.tech.step_groups.iter().map(|g| g.steps.len()).sum();
    println!("Technical steps: {steps} in {} groups", doc.tech.step_groups.len());
    if !is_blank(&doc.tech.repository) {
        println!("Repository: {}", doc.tech.repository);
    }

    let apis: Vec<&str> = doc
        .api_specs()
        .iter()
        .filter(|spec| !is_blank(&spec.name))
        .map(|spec| spec.name.as_str())
        .collect();
    if !apis.is_empty() {
        println!("APIs: {}", apis.join(", "));
    }

    for (i, spec) in doc.ui_specs().iter().enumerate() {
        let design = match &spec.design {
            Design::Attachment(attachment) => {
                format!("{} ({} KB)", attachment.display_name, attachment.size_kb())
            }
            Design::Text(_) | Design::Empty => "no image".to_string(),
        };
        println!("UI {}: {} [{design}]", i + 1, display(&spec.name));
    }
}

fn display(text: &str) -> &str {
    if is_blank(text) {
        "(empty)"
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_cover_every_step() {
        let lines = step_status(&TaskDocument::empty(), Strictness::Strict);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("1. Objective"));
        assert!(lines[0].ends_with("At least one objective is required"));
        assert!(lines[3].ends_with("ok"));
    }
}
