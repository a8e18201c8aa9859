//! Stored validation errors consulted by the renderer.

use std::collections::BTreeMap;

use super::outcome::{UiField, Verdict};
use crate::document::FieldKey;

/// Sub-field messages of one UI entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiFieldErrors {
    /// Message next to the name input.
    pub name: Option<String>,
    /// Message next to the design input.
    pub design: Option<String>,
}

/// Current error message per field, plus per-entry errors for UI.
///
/// A field with no entry has no error. The UI maps are only ever replaced
/// together with the UI step message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorState {
    fields: BTreeMap<FieldKey, String>,
    ui_items: BTreeMap<usize, String>,
    ui_fields: BTreeMap<usize, UiFieldErrors>,
}

impl ValidationErrorState {
    /// Stores the outcome of validating `key`.
    pub fn record(&mut self, key: FieldKey, verdict: &Verdict) {
        if key == FieldKey::Ui {
            self.ui_items.clear();
            self.ui_fields.clear();
        }
        match verdict {
            Verdict::Valid => {
                self.fields.remove(&key);
            }
            Verdict::Invalid(violation) => {
                if key == FieldKey::Ui {
                    for item in &violation.items {
                        self.ui_items.insert(item.index, item.message.clone());
                        let slot = self.ui_fields.entry(item.index).or_default();
                        match item.field {
                            UiField::Name => slot.name = Some(item.field_message.clone()),
                            UiField::Design => slot.design = Some(item.field_message.clone()),
                        }
                    }
                }
                self.fields.insert(key, violation.message.clone());
            }
        }
    }

    /// Current message for `key`, empty when none.
    #[must_use]
    pub fn field_error(&self, key: FieldKey) -> &str {
        self.fields.get(&key).map_or("", String::as_str)
    }

    /// Returns `true` if `key` currently has an error.
    #[must_use]
    pub fn has_error(&self, key: FieldKey) -> bool {
        !self.field_error(key).is_empty()
    }

    /// Entry-level message for UI entry `index`, empty when none.
    #[must_use]
    pub fn ui_item_error(&self, index: usize) -> &str {
        self.ui_items.get(&index).map_or("", String::as_str)
    }

    /// Name message for UI entry `index`, empty when none.
    #[must_use]
    pub fn ui_name_error(&self, index: usize) -> &str {
        self.ui_fields.get(&index).and_then(|f| f.name.as_deref()).unwrap_or("")
    }

    /// Design message for UI entry `index`, empty when none.
    #[must_use]
    pub fn ui_design_error(&self, index: usize) -> &str {
        self.ui_fields.get(&index).and_then(|f| f.design.as_deref()).unwrap_or("")
    }

    /// Fields with a current error, in document order.
    pub fn failing_fields(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.fields.iter().map(|(key, message)| (*key, message.as_str()))
    }

    /// Returns `true` when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.ui_items.is_empty() && self.ui_fields.is_empty()
    }

    /// Drops every stored error.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.ui_items.clear();
        self.ui_fields.clear();
    }
}
