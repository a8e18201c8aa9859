//! Technical specification types.

use serde::{Deserialize, Serialize};

/// A single implementation step with an optional file reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStep {
    /// What to do.
    #[serde(default)]
    pub step: String,
    /// Source file the step touches. Empty when not given.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file_reference: String,
}

impl TechStep {
    /// Creates a step without a file reference.
    #[must_use]
    pub fn new(step: &str) -> Self {
        Self { step: step.to_string(), file_reference: String::new() }
    }

    /// Creates a step pointing at `file`.
    #[must_use]
    pub fn with_file(step: &str, file: &str) -> Self {
        Self { step: step.to_string(), file_reference: file.to_string() }
    }
}

/// The steps implementing one objective (index-aligned with the objective list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepGroup {
    /// Ordered implementation steps.
    #[serde(default)]
    pub steps: Vec<TechStep>,
}

/// Technical specification: step groups plus project coordinates.
///
/// Optional text fields use the empty string for "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechSpec {
    /// One group of steps per objective.
    #[serde(default)]
    pub step_groups: Vec<StepGroup>,
    /// Design file URL.
    #[serde(default)]
    pub figma: String,
    /// Epic branch name.
    #[serde(default)]
    pub epic_branch: String,
    /// Repository URL.
    #[serde(default)]
    pub repository: String,
    /// URL of the page being changed.
    #[serde(default)]
    pub page: String,
    /// Account used for testing.
    #[serde(default)]
    pub account: String,
}

impl TechSpec {
    /// Canonical empty shape: one group holding one blank step.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            step_groups: vec![StepGroup { steps: vec![TechStep::default()] }],
            ..Self::default()
        }
    }
}
