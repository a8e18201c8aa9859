//! `taskwiz render` command.

use crate::render::{export_image_names, Dialect};
use crate::session::{Transition, WizardSession};
use crate::store::DraftStore;
use crate::validate::Strictness;

/// Validates every step and prints the export.
///
/// Images referenced by the export are listed on stderr so stdout stays
/// pasteable.
///
/// # Errors
///
/// Returns an error string if the draft cannot be loaded or a step fails.
pub fn run(
    store: &DraftStore<'_>,
    id: &str,
    dialect: Dialect,
    strictness: Strictness,
) -> Result<(), String> {
    let doc = store.load(id).map_err(|e| e.to_string())?;
    let images = export_image_names(&doc);
    let mut session = WizardSession::with_document(doc, strictness);
    let content = export(&mut session, dialect)?;
    println!("{content}");
    for image in &images {
        eprintln!("attach: {} -> {}", image.source.display(), image.file_name);
    }
    Ok(())
}

/// Renders the session's document once all steps pass.
///
/// # Errors
///
/// Returns the blocking step and its message.
pub fn export(session: &mut WizardSession, dialect: Dialect) -> Result<String, String> {
    match session.finish(dialect) {
        Ok(content) => Ok(content.to_string()),
        Err(Transition::Blocked { step, message }) => {
            Err(format!("cannot export: {step} is invalid: {message}"))
        }
        Err(other) => Err(format!("cannot export: {other:?}")),
    }
}
