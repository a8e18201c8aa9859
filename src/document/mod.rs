//! Task document types.
//!
//! The value object collected by the wizard, one field per wizard step plus
//! free-form notes. Serialized with camelCase keys so drafts round-trip
//! through YAML and JSON unchanged.

mod api;
mod field;
mod payload;
mod task;
mod tech;
mod ui;

pub use api::{ApiContract, ApiSpec};
pub use field::FieldKey;
pub use payload::format_json;
pub use task::{AcceptanceCriteria, TaskDocument};
pub use tech::{StepGroup, TechSpec, TechStep};
pub use ui::{Attachment, Design, UiSpec};

/// Returns `true` when `text` has no content after trimming.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Character count of `text` after trimming surrounding whitespace.
#[must_use]
pub fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
