//! `taskwiz fmt` command.

use crate::store::DraftStore;

/// Pretty-prints JSON payloads of a draft and saves it.
///
/// # Errors
///
/// Returns an error string if the draft cannot be loaded or saved.
pub fn run(store: &DraftStore<'_>, id: &str) -> Result<(), String> {
    let mut doc = store.load(id).map_err(|e| e.to_string())?;
    doc.format_api_payloads();
    store.save(id, &doc).map_err(|e| e.to_string())?;
    println!("Formatted payloads in {id}.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::context::testing::{context, MemFs};
    use crate::document::TaskDocument;

    #[test]
    fn formats_and_saves() {
        let ctx = context(MemFs::default());
        let store = DraftStore::new(&ctx, Path::new("/store"));
        let mut doc = TaskDocument::sample();
        if let Some(api) = doc.api.as_mut() {
            api[0].contract.request_payload = r#"{"a":[1,2]}"#.to_string();
        }
        store.save("d", &doc).unwrap();

        run(&store, "d").unwrap();
        let saved = store.load("d").unwrap();
        assert_eq!(saved.api_specs()[0].contract.request_payload, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }
}
