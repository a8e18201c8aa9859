//! The task document value object.

use serde::{Deserialize, Serialize};

use super::api::{ApiContract, ApiSpec};
use super::payload::format_json;
use super::tech::{StepGroup, TechSpec, TechStep};
use super::ui::{Design, UiSpec};

/// Given/When/Then conditions for one objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptanceCriteria {
    /// Preconditions.
    #[serde(default)]
    pub given: Vec<String>,
    /// Triggering actions.
    #[serde(default)]
    pub when: Vec<String>,
    /// Expected outcomes.
    #[serde(default)]
    pub then: Vec<String>,
}

impl Default for AcceptanceCriteria {
    /// One blank condition per clause.
    fn default() -> Self {
        Self { given: vec![String::new()], when: vec![String::new()], then: vec![String::new()] }
    }
}

impl AcceptanceCriteria {
    /// The three clauses in scan order, paired with their labels.
    #[must_use]
    pub fn clauses(&self) -> [(&'static str, &[String]); 3] {
        [
            ("Given", self.given.as_slice()),
            ("When", self.when.as_slice()),
            ("Then", self.then.as_slice()),
        ]
    }
}

/// Everything the wizard collects about a task.
///
/// `acceptance[i]` and `tech.step_groups[i]` describe `objective[i]`; the
/// lengths are not forced to match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDocument {
    /// What needs to be accomplished, one entry per objective.
    #[serde(default)]
    pub objective: Vec<String>,
    /// Acceptance criteria per objective.
    #[serde(default)]
    pub acceptance: Vec<AcceptanceCriteria>,
    /// Technical specification.
    #[serde(default)]
    pub tech: TechSpec,
    /// API specifications, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiSpec>>,
    /// UI specifications, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<Vec<UiSpec>>,
    /// Additional notes. Empty when not given.
    #[serde(default)]
    pub notes: String,
}

impl Default for TaskDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl TaskDocument {
    /// Canonical empty shape: one blank item in every list field.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            objective: vec![String::new()],
            acceptance: vec![AcceptanceCriteria::default()],
            tech: TechSpec::empty(),
            api: Some(vec![ApiSpec::default()]),
            ui: Some(vec![UiSpec::default()]),
            notes: String::new(),
        }
    }

    /// A fully worked example: an authentication system with a dashboard.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            objective: strings(&[
                "Implement user authentication system with login and registration functionality",
                "Create dashboard interface with user profile management and settings",
            ]),
            acceptance: vec![
                AcceptanceCriteria {
                    given: strings(&["User is on the login page", "User has valid credentials"]),
                    when: strings(&["User enters email and password", "User clicks the login button"]),
                    then: strings(&[
                        "User should be redirected to dashboard",
                        "User session should be created and stored",
                    ]),
                },
                AcceptanceCriteria {
                    given: strings(&[
                        "User is logged in and on dashboard",
                        "User profile data is available",
                    ]),
                    when: strings(&[
                        "User clicks on profile settings",
                        "User updates their profile information",
                    ]),
                    then: strings(&[
                        "Profile changes should be saved successfully",
                        "Updated information should be displayed immediately",
                    ]),
                },
            ],
            tech: TechSpec {
                step_groups: vec![
                    StepGroup {
                        steps: vec![
                            TechStep::with_file(
                                "Set up JWT authentication middleware",
                                "src/middleware/auth.ts",
                            ),
                            TechStep::with_file("Implement bcrypt password hashing", "src/utils/password.ts"),
                            TechStep::with_file(
                                "Create login and register API endpoints",
                                "src/routes/auth.ts",
                            ),
                        ],
                    },
                    StepGroup {
                        steps: vec![
                            TechStep::with_file(
                                "Create dashboard layout component",
                                "src/components/Dashboard.vue",
                            ),
                            TechStep::with_file(
                                "Implement user profile management",
                                "src/components/Profile.vue",
                            ),
                            TechStep::with_file(
                                "Add settings configuration",
                                "src/components/Settings.vue",
                            ),
                        ],
                    },
                ],
                figma: "https://www.figma.com/file/example/auth-system-design".to_string(),
                epic_branch: String::new(),
                repository: "https://github.com/company/auth-system".to_string(),
                page: "https://app.example.com/auth".to_string(),
                account: "dev.genesis@company.com".to_string(),
            },
            api: Some(vec![ApiSpec {
                name: "User Authentication API".to_string(),
                endpoint_url: "https://api.example.com/auth".to_string(),
                contract: ApiContract {
                    method: "POST".to_string(),
                    request_payload: format_json(r#"{"email":"string","password":"string"}"#),
                    response_payload: format_json(
                        r#"{"token":"string","user":{"id":"string","email":"string","name":"string"}}"#,
                    ),
                },
            }]),
            ui: Some(vec![
                UiSpec {
                    name: "Login Form".to_string(),
                    design: Design::Empty,
                    note: "Include remember me checkbox and forgot password link".to_string(),
                },
                UiSpec {
                    name: "Dashboard".to_string(),
                    design: Design::Empty,
                    note: "Responsive design for mobile devices".to_string(),
                },
            ]),
            notes: [
                "• Consider implementing 2FA for enhanced security",
                "• Add password reset functionality",
                "• Include user activity logging",
                "• Plan for scalability with user growth",
                "• Test with various browsers and devices",
            ]
            .join("\n"),
        }
    }

    /// API entries, empty when the field is absent.
    #[must_use]
    pub fn api_specs(&self) -> &[ApiSpec] {
        self.api.as_deref().unwrap_or_default()
    }

    /// UI entries, empty when the field is absent.
    #[must_use]
    pub fn ui_specs(&self) -> &[UiSpec] {
        self.ui.as_deref().unwrap_or_default()
    }

    /// Pretty-prints every request and response payload that is valid JSON.
    pub fn format_api_payloads(&mut self) {
        for spec in self.api.iter_mut().flatten() {
            spec.contract.request_payload = format_json(&spec.contract.request_payload);
            spec.contract.response_payload = format_json(&spec.contract.response_payload);
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
