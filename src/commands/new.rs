//! `taskwiz new` command.

use crate::document::TaskDocument;
use crate::store::DraftStore;

/// Creates a draft and prints its ID.
///
/// # Errors
///
/// Returns an error string if the draft cannot be written.
pub fn run(store: &DraftStore<'_>, sample: bool) -> Result<(), String> {
    let doc = if sample { TaskDocument::sample() } else { TaskDocument::empty() };
    let id = store.create(&doc).map_err(|e| e.to_string())?;
    println!("{id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::context::testing::{context, MemFs};

    #[test]
    fn writes_sample_draft() {
        let ctx = context(MemFs::default());
        let store = DraftStore::new(&ctx, Path::new("/store"));
        run(&store, true).unwrap();
        assert_eq!(store.load("id-1").unwrap(), TaskDocument::sample());
    }
}
