//! UI specification types and design attachments.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::is_blank;

/// Reference to a binary image produced by the attachment intake.
///
/// The document only holds the reference; the bytes stay where the intake
/// found them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Opaque handle assigned at intake.
    pub handle: String,
    /// Location of the binary.
    pub path: PathBuf,
    /// File name shown to the user.
    pub display_name: String,
    /// MIME type, always `image/*`.
    pub mime_type: String,
    /// Size of the binary in bytes.
    pub size_bytes: u64,
    /// When the attachment was taken in.
    pub attached_at: DateTime<Utc>,
}

impl Attachment {
    /// Size in kilobytes with one decimal, as shown in exports.
    #[must_use]
    pub fn size_kb(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let kb = self.size_bytes as f64 / 1024.0;
        format!("{kb:.1}")
    }

    /// Extension of the display name, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.display_name.rsplit_once('.').map(|(_, ext)| ext).filter(|ext| !ext.is_empty())
    }
}

/// Design slot of a UI entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Design {
    /// Nothing provided.
    #[default]
    Empty,
    /// A binary image attachment.
    Attachment(Attachment),
    /// Free text (for example a link). Does not satisfy the design requirement.
    Text(String),
}

impl Design {
    /// Returns `true` only for an attached image.
    #[must_use]
    pub fn is_attachment(&self) -> bool {
        matches!(self, Design::Attachment(_))
    }

    /// Returns `true` when nothing usable is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Design::Empty => true,
            Design::Attachment(_) => false,
            Design::Text(text) => is_blank(text),
        }
    }

    fn is_unset(&self) -> bool {
        matches!(self, Design::Empty)
    }
}

/// One screen or component of the UI specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSpec {
    /// Screen or component name.
    #[serde(default)]
    pub name: String,
    /// Design image.
    #[serde(default, skip_serializing_if = "Design::is_unset")]
    pub design: Design,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl UiSpec {
    /// Returns `true` if the entry has a non-blank name.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !is_blank(&self.name)
    }

    /// Returns `true` if the entry holds an image attachment.
    #[must_use]
    pub fn has_design(&self) -> bool {
        self.design.is_attachment()
    }

    /// Drops whatever design the entry holds, returning it.
    pub fn clear_design(&mut self) -> Design {
        std::mem::take(&mut self.design)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(name: &str, size: u64) -> Attachment {
        Attachment {
            handle: "h-1".to_string(),
            path: PathBuf::from(name),
            display_name: name.to_string(),
            mime_type: "image/png".to_string(),
            size_bytes: size,
            attached_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn text_design_is_not_an_attachment() {
        let spec = UiSpec {
            name: "Login".to_string(),
            design: Design::Text("https://figma.com/x".to_string()),
            note: String::new(),
        };
        assert!(!spec.has_design());
        assert!(!spec.design.is_empty());
    }

    #[test]
    fn size_kb_has_one_decimal() {
        assert_eq!(attachment("a.png", 2048).size_kb(), "2.0");
        assert_eq!(attachment("a.png", 1536).size_kb(), "1.5");
    }

    #[test]
    fn extension_comes_from_display_name() {
        assert_eq!(attachment("login.jpeg", 1).extension(), Some("jpeg"));
        assert_eq!(attachment("login", 1).extension(), None);
    }

    #[test]
    fn design_deserializes_each_variant() {
        let empty: UiSpec = serde_yaml::from_str("name: A\n").unwrap();
        assert_eq!(empty.design, Design::Empty);

        let text: UiSpec = serde_yaml::from_str("name: A\ndesign: sketch\n").unwrap();
        assert_eq!(text.design, Design::Text("sketch".to_string()));

        let yaml = serde_yaml::to_string(&UiSpec {
            name: "A".to_string(),
            design: Design::Attachment(attachment("a.png", 10)),
            note: String::new(),
        })
        .unwrap();
        let parsed: UiSpec = serde_yaml::from_str(&yaml).unwrap();
        assert!(parsed.has_design());
    }

    #[test]
    fn clear_design_empties_the_slot() {
        let mut spec = UiSpec {
            name: "Login".to_string(),
            design: Design::Attachment(attachment("login.png", 10)),
            note: String::new(),
        };
        let removed = spec.clear_design();
        assert!(removed.is_attachment());
        assert_eq!(spec.design, Design::Empty);
        assert!(!spec.has_design());
        assert!(spec.has_name());
    }
}
