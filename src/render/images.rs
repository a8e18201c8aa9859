//! File names for design images that accompany an export.

use std::path::PathBuf;

use crate::document::{Design, TaskDocument};

/// A design image to ship next to the exported text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportImage {
    /// Where the binary lives.
    pub source: PathBuf,
    /// Name to give the exported copy.
    pub file_name: String,
}

/// Lists the attachments of named UI entries with export file names.
///
/// Names become `{name}-{n}.{ext}` with every non-alphanumeric character
/// replaced by `-`; the extension defaults to `png`.
#[must_use]
pub fn export_image_names(doc: &TaskDocument) -> Vec<ExportImage> {
    doc.ui_specs()
        .iter()
        .enumerate()
        .filter_map(|(i, spec)| match &spec.design {
            Design::Attachment(attachment) if spec.has_name() => {
                let stem: String = spec
                    .name
                    .chars()
                    .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
                    .collect();
                let ext = attachment.extension().unwrap_or("png");
                Some(ExportImage {
                    source: attachment.path.clone(),
                    file_name: format!("{stem}-{}.{ext}", i + 1),
                })
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::document::{Attachment, UiSpec};

    fn with_image(name: &str, display: &str) -> UiSpec {
        UiSpec {
            name: name.to_string(),
            design: Design::Attachment(Attachment {
                handle: "h".to_string(),
                path: PathBuf::from(format!("/tmp/{display}")),
                display_name: display.to_string(),
                mime_type: "image/png".to_string(),
                size_bytes: 1,
                attached_at: DateTime::<Utc>::UNIX_EPOCH,
            }),
            note: String::new(),
        }
    }

    #[test]
    fn sanitizes_names_and_keeps_extension() {
        let mut doc = TaskDocument::empty();
        doc.ui = Some(vec![
            UiSpec::default(),
            with_image("Login Form", "shot.jpeg"),
            with_image("", "orphan.png"),
            // No extension on the display name: falls back to png rather
            // than reusing the whole name as the extension.
            with_image("Dash/Board", "board"),
        ]);
        let images = export_image_names(&doc);
        let names: Vec<&str> = images.iter().map(|img| img.file_name.as_str()).collect();
        assert_eq!(names, vec!["Login-Form-2.jpeg", "Dash-Board-4.png"]);
        assert_eq!(images[0].source, PathBuf::from("/tmp/shot.jpeg"));
    }
}
