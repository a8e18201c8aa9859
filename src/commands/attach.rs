//! `taskwiz attach` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::document::{Attachment, Design, TaskDocument, UiSpec};
use crate::intake::intake_image;
use crate::store::DraftStore;

/// Attaches the image at `image` to UI entry `ui` (1-based) of a draft.
///
/// # Errors
///
/// Returns an error string if the draft cannot be loaded or saved, the
/// entry number is out of range, or the file is not a readable image.
pub fn run(
    ctx: &ServiceContext,
    store: &DraftStore<'_>,
    id: &str,
    ui: usize,
    image: &Path,
) -> Result<(), String> {
    let mut doc = store.load(id).map_err(|e| e.to_string())?;
    let attachment = intake_image(ctx, image).map_err(|e| e.to_string())?;
    let summary = format!("{} ({} KB)", attachment.display_name, attachment.size_kb());
    set_design(&mut doc, ui, attachment)?;
    store.save(id, &doc).map_err(|e| e.to_string())?;
    println!("Attached {summary} to UI specification {ui}");
    Ok(())
}

/// Sets the design of entry `ui` (1-based), appending a new entry when
/// `ui` is one past the end.
///
/// # Errors
///
/// Returns an error string when `ui` is zero or more than one past the end.
pub fn set_design(doc: &mut TaskDocument, ui: usize, attachment: Attachment) -> Result<(), String> {
    let specs = doc.ui.get_or_insert_with(Vec::new);
    let len = specs.len();
    if ui == 0 || ui > len + 1 {
        return Err(format!("UI specification {ui} does not exist (draft has {len})"));
    }
    if ui == len + 1 {
        specs.push(UiSpec::default());
    }
    specs[ui - 1].design = Design::Attachment(attachment);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::context::testing::{context, MemFs};

    #[test]
    fn appends_entry_when_list_is_absent() {
        let ctx = context(MemFs::default().with_binary("/img/home.png", 2048));
        let store = DraftStore::new(&ctx, Path::new("/store"));
        let mut doc = TaskDocument::empty();
        doc.ui = None;
        store.save("d", &doc).unwrap();

        run(&ctx, &store, "d", 1, Path::new("/img/home.png")).unwrap();

        let doc = store.load("d").unwrap();
        let specs = doc.ui_specs();
        assert_eq!(specs.len(), 1);
        assert!(specs[0].has_design());
        assert!(!specs[0].has_name());
    }

    #[test]
    fn appends_one_past_the_end() {
        let ctx = context(MemFs::default().with_binary("/img/home.png", 2048));
        let store = DraftStore::new(&ctx, Path::new("/store"));
        let mut doc = TaskDocument::empty();
        doc.ui = Some(vec![UiSpec { name: "Login".to_string(), ..UiSpec::default() }]);
        store.save("d", &doc).unwrap();

        run(&ctx, &store, "d", 2, Path::new("/img/home.png")).unwrap();

        let specs = store.load("d").unwrap().ui.unwrap();
        assert_eq!(specs.len(), 2);
        assert!(!specs[0].has_design());
        assert!(specs[1].has_design());
    }

    #[test]
    fn replaces_existing_design() {
        let ctx = context(MemFs::default().with_binary("/img/new.png", 10));
        let store = DraftStore::new(&ctx, Path::new("/store"));
        let mut doc = TaskDocument::empty();
        doc.ui = Some(vec![UiSpec { name: "Login".to_string(), ..UiSpec::default() }]);
        store.save("d", &doc).unwrap();

        run(&ctx, &store, "d", 1, Path::new("/img/new.png")).unwrap();

        let specs = store.load("d").unwrap().ui.unwrap();
        assert_eq!(specs.len(), 1);
        match &specs[0].design {
            Design::Attachment(a) => assert_eq!(a.display_name, "new.png"),
            other => panic!("unexpected design {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_entries() {
        let ctx = context(MemFs::default().with_binary("/img/a.png", 1));
        let store = DraftStore::new(&ctx, Path::new("/store"));
        store.save("d", &TaskDocument::empty()).unwrap();

        assert!(run(&ctx, &store, "d", 0, Path::new("/img/a.png")).is_err());
        assert!(run(&ctx, &store, "d", 3, Path::new("/img/a.png")).is_err());
    }

    #[test]
    fn rejects_non_images_without_saving() {
        let ctx = context(MemFs::default().with_binary("/docs/brief.pdf", 1));
        let store = DraftStore::new(&ctx, Path::new("/store"));
        store.save("d", &TaskDocument::empty()).unwrap();

        assert!(run(&ctx, &store, "d", 1, Path::new("/docs/brief.pdf")).is_err());
        assert_eq!(store.load("d").unwrap(), TaskDocument::empty());
    }
}
