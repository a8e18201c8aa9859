//! Attachment intake: turns an image file into a design attachment.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::context::ServiceContext;
use crate::document::Attachment;

/// Why a file could not be attached.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The file is missing or unreadable.
    #[error("cannot read {path}: {reason}")]
    Unreadable {
        /// Offending path.
        path: String,
        /// Underlying error text.
        reason: String,
    },
    /// The file is not a recognised image type.
    #[error("{0} is not an image (expected png, jpg, jpeg, gif, webp, bmp or svg)")]
    NotAnImage(String),
}

/// MIME type for an image file name, judged by extension.
#[must_use]
pub fn image_mime_type(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Takes in the image at `path`, returning a reference to it.
///
/// The bytes are not copied; the attachment records where they are.
///
/// # Errors
///
/// Returns [`IntakeError::NotAnImage`] for non-image files and
/// [`IntakeError::Unreadable`] when the file size cannot be read.
pub fn intake_image(ctx: &ServiceContext, path: &Path) -> Result<Attachment, IntakeError> {
    let display_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type =
        image_mime_type(&display_name).ok_or_else(|| IntakeError::NotAnImage(display_name.clone()))?;
    let size_bytes = ctx.fs.file_size(path).map_err(|e| IntakeError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let attachment = Attachment {
        handle: ctx.id_gen.generate_id(),
        path: path.to_path_buf(),
        display_name,
        mime_type: mime_type.to_string(),
        size_bytes,
        attached_at: ctx.clock.now(),
    };
    info!(handle = %attachment.handle, name = %attachment.display_name, size = size_bytes, "image attached");
    Ok(attachment)
}
