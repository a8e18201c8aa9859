//! Field kinds of a task document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The six top-level fields of a [`TaskDocument`](super::TaskDocument).
///
/// Five of them back a wizard step; `Notes` is validated opportunistically
/// and never gates progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    /// Ordered list of objectives.
    Objective,
    /// Given/When/Then criteria, one set per objective.
    Acceptance,
    /// Technical specification.
    Tech,
    /// Optional API specifications.
    Api,
    /// Optional UI specifications.
    Ui,
    /// Free-form notes.
    Notes,
}

impl FieldKey {
    /// All field kinds in document order.
    pub const ALL: [FieldKey; 6] = [
        FieldKey::Objective,
        FieldKey::Acceptance,
        FieldKey::Tech,
        FieldKey::Api,
        FieldKey::Ui,
        FieldKey::Notes,
    ];

    /// Stable lowercase key used in error maps and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Objective => "objective",
            FieldKey::Acceptance => "acceptance",
            FieldKey::Tech => "tech",
            FieldKey::Api => "api",
            FieldKey::Ui => "ui",
            FieldKey::Notes => "notes",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = FieldKey::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown field '{s}' (expected one of: {})", known.join(", "))
            })
    }
}
