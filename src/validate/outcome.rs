//! Validation verdicts and strictness.

use std::fmt;
use std::str::FromStr;

/// How demanding the rules are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strictness {
    /// Every step section is mandatory.
    #[default]
    Strict,
    /// Sections are optional; non-empty entries must still be well-formed.
    Lenient,
}

impl Strictness {
    /// Lowercase name used in config and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Strictness::Strict => "strict",
            Strictness::Lenient => "lenient",
        }
    }

    /// Returns `true` in strict mode.
    #[must_use]
    pub fn is_strict(self) -> bool {
        self == Strictness::Strict
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strictness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Strictness::Strict),
            "lenient" => Ok(Strictness::Lenient),
            other => Err(format!("unknown mode '{other}' (expected strict or lenient)")),
        }
    }
}

/// Category of a rule failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A structural or bound constraint failed with no more specific rule to blame.
    Shape,
    /// A specific rule (minimum length, required field, all-or-nothing) is unmet.
    Content,
    /// A UI entry has a name without a design image or the reverse.
    ConditionalPair,
}

/// Side of a UI entry an item error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiField {
    /// The entry name.
    Name,
    /// The design image.
    Design,
}

/// Error attributed to one UI entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemViolation {
    /// 0-based entry index.
    pub index: usize,
    /// Which side is missing.
    pub field: UiField,
    /// Entry-level message naming the entry.
    pub message: String,
    /// Short message shown next to the missing input.
    pub field_message: String,
}

/// A failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Category of the failure.
    pub kind: ViolationKind,
    /// Step-level message; only the first problem found is reported.
    pub message: String,
    /// Per-entry errors, populated for UI only.
    pub items: Vec<ItemViolation>,
}

impl Violation {
    /// A violation without per-entry errors.
    #[must_use]
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), items: Vec::new() }
    }
}

/// Result of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// All rules hold.
    Valid,
    /// At least one rule failed.
    Invalid(Violation),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Step-level message, if invalid.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(violation) => Some(&violation.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictness_parses_case_insensitively() {
        assert_eq!("Lenient".parse::<Strictness>().unwrap(), Strictness::Lenient);
        assert_eq!(" strict ".parse::<Strictness>().unwrap(), Strictness::Strict);
        assert!("loose".parse::<Strictness>().is_err());
    }
}
