//! The fixed, ordered catalog of wizard steps.

use std::fmt;

use crate::document::FieldKey;

/// One of the five wizard phases, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Describe what needs to be accomplished.
    Objective,
    /// Given/When/Then criteria.
    AcceptanceCriteria,
    /// Technical details and implementation steps.
    TechnicalSpecification,
    /// Endpoints and contracts.
    ApiSpecification,
    /// Screens and design images.
    UiSpecification,
}

impl Step {
    /// Catalog order. Not reorderable at runtime.
    pub const ALL: [Step; 5] = [
        Step::Objective,
        Step::AcceptanceCriteria,
        Step::TechnicalSpecification,
        Step::ApiSpecification,
        Step::UiSpecification,
    ];

    /// Number of steps in the catalog.
    pub const COUNT: usize = Step::ALL.len();

    /// Step at a 0-based catalog index.
    #[must_use]
    pub fn at(index: usize) -> Option<Step> {
        Step::ALL.get(index).copied()
    }

    /// 0-based position in the catalog.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Document field validated by this step.
    #[must_use]
    pub fn key(self) -> FieldKey {
        match self {
            Step::Objective => FieldKey::Objective,
            Step::AcceptanceCriteria => FieldKey::Acceptance,
            Step::TechnicalSpecification => FieldKey::Tech,
            Step::ApiSpecification => FieldKey::Api,
            Step::UiSpecification => FieldKey::Ui,
        }
    }

    /// Step backed by `key`; `None` for notes.
    #[must_use]
    pub fn for_key(key: FieldKey) -> Option<Step> {
        Step::ALL.into_iter().find(|step| step.key() == key)
    }

    /// Human-readable title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Step::Objective => "Objective",
            Step::AcceptanceCriteria => "Acceptance Criteria",
            Step::TechnicalSpecification => "Technical Specification",
            Step::ApiSpecification => "API Specification",
            Step::UiSpecification => "UI Specification",
        }
    }

    /// One-line prompt shown under the title.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Step::Objective => "Describe what needs to be accomplished",
            Step::AcceptanceCriteria => {
                "Define the acceptance criteria using Given-When-Then format"
            }
            Step::TechnicalSpecification => {
                "Provide technical details, architecture, and implementation approach"
            }
            Step::ApiSpecification => "Define API endpoints, request/response formats (optional)",
            Step::UiSpecification => {
                "Describe UI/UX requirements, mockups, or design notes (optional)"
            }
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
