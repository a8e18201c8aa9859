//! `taskwiz list` command.

use crate::store::DraftStore;

/// Lists draft IDs.
///
/// # Errors
///
/// Returns an error string if the store cannot be listed.
pub fn run(store: &DraftStore<'_>) -> Result<(), String> {
    let ids = store.list().map_err(|e| e.to_string())?;
    if ids.is_empty() {
        println!("No drafts found in store.");
    } else {
        println!("Available drafts:");
        for id in &ids {
            println!("  {id}");
        }
        println!("\nUse `taskwiz show <ID>` to view details.");
    }
    Ok(())
}
