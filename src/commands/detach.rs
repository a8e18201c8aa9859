//! `taskwiz detach` command.

use crate::document::{Design, TaskDocument};
use crate::store::DraftStore;

/// Clears the design of UI entry `ui` (1-based) of a draft.
///
/// # Errors
///
/// Returns an error string if the draft cannot be loaded or saved, or the
/// entry does not exist.
pub fn run(store: &DraftStore<'_>, id: &str, ui: usize) -> Result<(), String> {
    let mut doc = store.load(id).map_err(|e| e.to_string())?;
    let removed = clear_design(&mut doc, ui)?;
    store.save(id, &doc).map_err(|e| e.to_string())?;
    match removed {
        Design::Attachment(attachment) => {
            println!("Removed {} from UI specification {ui}", attachment.display_name);
        }
        Design::Text(_) | Design::Empty => println!("Cleared design of UI specification {ui}"),
    }
    Ok(())
}

/// Empties the design slot of entry `ui` (1-based), returning what it held.
///
/// # Errors
///
/// Returns an error string when `ui` does not name an existing entry.
pub fn clear_design(doc: &mut TaskDocument, ui: usize) -> Result<Design, String> {
    let len = doc.ui_specs().len();
    let slot = ui.checked_sub(1).and_then(|index| doc.ui.as_mut()?.get_mut(index));
    match slot {
        Some(spec) => Ok(spec.clear_design()),
        None => Err(format!("UI specification {ui} does not exist (draft has {len})")),
    }
}
