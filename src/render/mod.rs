//! Export of a finished task document.
//!
//! One walk over the document produces every dialect; [`Dialect`] only
//! decides the markup around each piece.

mod dialect;
mod images;

pub use dialect::Dialect;
pub use images::{export_image_names, ExportImage};

use serde::Serialize;
use tracing::debug;

use crate::document::{is_blank, ApiSpec, Design, TaskDocument, UiSpec};

const ATTACH_MARKER: &str = "ATTACH IMAGE:";

/// Renders task documents in one dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    dialect: Dialect,
}

#[derive(Serialize)]
struct UiExport<'a> {
    name: &'a str,
    design: String,
    notes: &'a str,
}

impl Serializer {
    /// Creates a serializer for `dialect`.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Dialect this serializer writes.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Renders `doc` with surrounding whitespace trimmed.
    #[must_use]
    pub fn render(&self, doc: &TaskDocument) -> String {
        let mut out = String::new();
        self.objective(&mut out, doc);
        self.acceptance(&mut out, doc);
        self.tech(&mut out, doc);
        self.api(&mut out, doc.api_specs());
        self.ui(&mut out, doc.ui_specs());
        self.notes(&mut out, &doc.notes);

        let rendered = out.trim().to_string();
        debug!(
            dialect = %self.dialect,
            length = rendered.len(),
            attachments = rendered.matches(ATTACH_MARKER).count(),
            "rendered document"
        );
        rendered
    }

    fn objective(&self, out: &mut String, doc: &TaskDocument) {
        let d = self.dialect;
        out.push_str(&d.heading(2, "Objective"));
        for (i, objective) in doc.objective.iter().enumerate() {
            if !is_blank(objective) {
                out.push_str(&d.numbered(0, i + 1, objective));
            }
        }
        out.push('\n');
        out.push_str(d.divider());
    }

    fn acceptance(&self, out: &mut String, doc: &TaskDocument) {
        let d = self.dialect;
        out.push_str(&d.heading(2, "Acceptance Criteria"));
        out.push_str(&d.code_open("gherkin"));
        for (i, criteria) in doc.acceptance.iter().enumerate() {
            out.push_str(&format!("{}. {}:\n", i + 1, objective_title(doc, i)));
            for (label, items) in criteria.clauses() {
                for item in items.iter().filter(|item| !is_blank(item)) {
                    out.push_str(&format!("   {label} {item}\n"));
                }
            }
            out.push('\n');
        }
        out.push_str(d.code_close());
        out.push_str(d.divider());
    }

    fn tech(&self, out: &mut String, doc: &TaskDocument) {
        let d = self.dialect;
        let tech = &doc.tech;
        out.push_str(&d.heading(2, "Technical Specification"));

        let details = [
            ("Figma", &tech.figma),
            ("Epic Branch", &tech.epic_branch),
            ("Repository", &tech.repository),
            ("Page", &tech.page),
            ("Account", &tech.account),
        ];
        if details.iter().any(|(_, value)| !value.is_empty()) {
            out.push_str(&d.heading(3, "Technical Details"));
            for (name, value) in details.iter().filter(|(_, value)| !value.is_empty()) {
                out.push_str(&d.label(name, value));
            }
            out.push('\n');
        }

        if !tech.step_groups.is_empty() {
            out.push_str(&d.heading(3, "Technical Steps"));
            for (g, group) in tech.step_groups.iter().enumerate() {
                if group.steps.iter().all(|step| is_blank(&step.step)) {
                    continue;
                }
                out.push_str(&d.numbered(0, g + 1, &format!("{}:", objective_title(doc, g))));
                for (j, step) in group.steps.iter().enumerate() {
                    if is_blank(&step.step) {
                        continue;
                    }
                    let text = if is_blank(&step.file_reference) {
                        step.step.clone()
                    } else {
                        format!(
                            "{} {}",
                            step.step,
                            d.emphasis(&format!("(File: {})", step.file_reference))
                        )
                    };
                    out.push_str(&d.numbered(1, j + 1, &text));
                }
                out.push('\n');
            }
        }

        out.push_str(d.divider());
    }

    fn api(&self, out: &mut String, specs: &[ApiSpec]) {
        let named: Vec<&ApiSpec> = specs.iter().filter(|spec| !is_blank(&spec.name)).collect();
        if named.is_empty() {
            return;
        }
        let d = self.dialect;
        out.push_str(&d.heading(2, "API Specification"));
        self.json_block(out, &named);
        out.push_str(d.divider());
    }

    fn ui(&self, out: &mut String, specs: &[UiSpec]) {
        let entries: Vec<UiExport<'_>> = specs
            .iter()
            .filter(|spec| spec.has_name() || !spec.design.is_empty())
            .map(|spec| UiExport {
                name: &spec.name,
                design: design_text(&spec.design),
                notes: &spec.note,
            })
            .collect();
        if entries.is_empty() {
            return;
        }
        let d = self.dialect;
        out.push_str(&d.heading(2, "UI Specification"));
        self.json_block(out, &entries);
        out.push_str(d.divider());
    }

    fn notes(&self, out: &mut String, notes: &str) {
        if is_blank(notes) {
            return;
        }
        let d = self.dialect;
        out.push_str(&d.heading(2, "Additional Notes"));
        out.push_str(&d.collapsible("Click to expand notes", notes));
    }

    fn json_block<T: Serialize>(&self, out: &mut String, value: &T) {
        let d = self.dialect;
        let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string());
        out.push_str(&d.code_open("json"));
        out.push_str(&json);
        out.push('\n');
        out.push_str(d.code_close());
    }
}

fn objective_title(doc: &TaskDocument, index: usize) -> String {
    match doc.objective.get(index) {
        Some(objective) if !objective.is_empty() => objective.clone(),
        _ => format!("Objective {}", index + 1),
    }
}

fn design_text(design: &Design) -> String {
    match design {
        Design::Empty => String::new(),
        Design::Attachment(attachment) => format!(
            "⚠️ {ATTACH_MARKER} {name} ({kb} KB) - Please attach the binary image file \"{name}\" to this Jira issue",
            name = attachment.display_name,
            kb = attachment.size_kb(),
        ),
        Design::Text(text) if is_blank(text) => String::new(),
        Design::Text(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::document::{AcceptanceCriteria, Attachment, StepGroup, TechSpec, TechStep};

    fn small_doc() -> TaskDocument {
        TaskDocument {
            objective: vec!["Add login".to_string()],
            acceptance: vec![AcceptanceCriteria {
                given: vec!["a user".to_string(), String::new()],
                when: vec!["they log in".to_string()],
                then: vec!["they see home".to_string()],
            }],
            tech: TechSpec {
                step_groups: vec![StepGroup {
                    steps: vec![
                        TechStep::with_file("Add route", "src/auth.rs"),
                        TechStep::new("Wire form"),
                    ],
                }],
                repository: "https://git.example.com/app".to_string(),
                ..TechSpec::default()
            },
            api: None,
            ui: None,
            notes: String::new(),
        }
    }

    #[test]
    fn markdown_layout() {
        let md = Serializer::new(Dialect::Markdown).render(&small_doc());
        let expected = "\
## Objective

1. Add login

---

## Acceptance Criteria

```gherkin
1. Add login:
   Given a user
   When they log in
   Then they see home

```

---

## Technical Specification

### Technical Details

**Repository:** https://git.example.com/app

### Technical Steps

1. Add login:
   1. Add route *(File: src/auth.rs)*
   2. Wire form

---";
        assert_eq!(md, expected);
    }

    #[test]
    fn wiki_layout_shares_the_walk() {
        let wiki = Serializer::new(Dialect::Wiki).render(&small_doc());
        assert!(wiki.starts_with("h2. Objective\n\n# Add login\n"));
        assert!(wiki.contains("{code:gherkin}\n1. Add login:\n   Given a user\n"));
        assert!(wiki.contains("*Repository:* https://git.example.com/app\n"));
        assert!(wiki.contains("## Add route _(File: src/auth.rs)_\n"));
        assert!(wiki.ends_with("----"));
    }

    #[test]
    fn api_section_lists_named_entries_as_json() {
        let mut doc = small_doc();
        let mut named = TaskDocument::sample().api_specs()[0].clone();
        named.contract.request_payload = "{}".to_string();
        doc.api = Some(vec![ApiSpec::default(), named]);
        let md = Serializer::new(Dialect::Markdown).render(&doc);
        assert!(md.contains("## API Specification\n\n```json\n[\n  {\n    \"name\": \"User Authentication API\",\n    \"endpointUrl\": \"https://api.example.com/auth\",\n    \"contract\": {\n      \"method\": \"POST\",\n      \"requestPayload\": \"{}\","));
        assert_eq!(md.matches("\"name\"").count(), 1);
    }

    #[test]
    fn api_section_omitted_without_names() {
        let mut doc = small_doc();
        doc.api = Some(vec![ApiSpec::default()]);
        let md = Serializer::new(Dialect::Markdown).render(&doc);
        assert!(!md.contains("API Specification"));
    }

    #[test]
    fn ui_attachment_becomes_attach_instruction() {
        let mut doc = small_doc();
        doc.ui = Some(vec![
            UiSpec {
                name: "Login".to_string(),
                design: Design::Attachment(Attachment {
                    handle: "h".to_string(),
                    path: PathBuf::from("login.png"),
                    display_name: "login.png".to_string(),
                    mime_type: "image/png".to_string(),
                    size_bytes: 3072,
                    attached_at: DateTime::<Utc>::UNIX_EPOCH,
                }),
                note: "Remember me".to_string(),
            },
            UiSpec::default(),
        ]);
        let md = Serializer::new(Dialect::Markdown).render(&doc);
        assert!(md.contains("## UI Specification"));
        assert!(md.contains(
            "\"design\": \"⚠️ ATTACH IMAGE: login.png (3.0 KB) - Please attach the binary image file \\\"login.png\\\" to this Jira issue\""
        ));
        assert!(md.contains("\"notes\": \"Remember me\""));
        assert_eq!(md.matches("\"name\"").count(), 1);
    }

    #[test]
    fn notes_are_collapsible() {
        let mut doc = small_doc();
        doc.notes = "Remember 2FA".to_string();
        let md = Serializer::new(Dialect::Markdown).render(&doc);
        assert!(md.ends_with(
            "## Additional Notes\n\n<details>\n<summary>Click to expand notes</summary>\n\nRemember 2FA\n\n</details>"
        ));
        let wiki = Serializer::new(Dialect::Wiki).render(&doc);
        assert!(wiki.ends_with("{expand:Click to expand notes}\nRemember 2FA\n{expand}"));
    }

    #[test]
    fn missing_objective_falls_back_to_number() {
        let mut doc = small_doc();
        doc.objective.clear();
        let md = Serializer::new(Dialect::Markdown).render(&doc);
        assert!(md.contains("1. Objective 1:\n   Given a user"));
    }

    #[test]
    fn groups_without_steps_are_skipped() {
        let mut doc = small_doc();
        doc.tech.step_groups.insert(0, StepGroup { steps: vec![TechStep::new("  ")] });
        let md = Serializer::new(Dialect::Markdown).render(&doc);
        assert!(md.contains("### Technical Steps\n\n2. Objective 2:\n"));
    }
}
