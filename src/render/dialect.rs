//! Output dialects of the exporter.

use std::fmt;
use std::str::FromStr;

/// Text markup the serializer writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// GitHub-flavoured Markdown.
    #[default]
    Markdown,
    /// Jira wiki markup.
    Wiki,
}

impl Dialect {
    /// Lowercase name used in config and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Markdown => "markdown",
            Dialect::Wiki => "wiki",
        }
    }

    pub(super) fn heading(self, level: usize, text: &str) -> String {
        match self {
            Dialect::Markdown => format!("{} {text}\n\n", "#".repeat(level)),
            Dialect::Wiki => format!("h{level}. {text}\n\n"),
        }
    }

    pub(super) fn divider(self) -> &'static str {
        match self {
            Dialect::Markdown => "---\n\n",
            Dialect::Wiki => "----\n\n",
        }
    }

    pub(super) fn code_open(self, lang: &str) -> String {
        match self {
            Dialect::Markdown => format!("```{lang}\n"),
            Dialect::Wiki => format!("{{code:{lang}}}\n"),
        }
    }

    pub(super) fn code_close(self) -> &'static str {
        match self {
            Dialect::Markdown => "```\n\n",
            Dialect::Wiki => "{code}\n\n",
        }
    }

    /// Numbered list item; `depth` 0 is top level.
    pub(super) fn numbered(self, depth: usize, n: usize, text: &str) -> String {
        match self {
            Dialect::Markdown => format!("{}{n}. {text}\n", "   ".repeat(depth)),
            Dialect::Wiki => format!("{} {text}\n", "#".repeat(depth + 1)),
        }
    }

    pub(super) fn label(self, name: &str, value: &str) -> String {
        match self {
            Dialect::Markdown => format!("**{name}:** {value}\n"),
            Dialect::Wiki => format!("*{name}:* {value}\n"),
        }
    }

    pub(super) fn emphasis(self, text: &str) -> String {
        match self {
            Dialect::Markdown => format!("*{text}*"),
            Dialect::Wiki => format!("_{text}_"),
        }
    }

    pub(super) fn collapsible(self, summary: &str, body: &str) -> String {
        match self {
            Dialect::Markdown => {
                format!("<details>\n<summary>{summary}</summary>\n\n{body}\n\n</details>\n\n")
            }
            Dialect::Wiki => format!("{{expand:{summary}}}\n{body}\n{{expand}}\n\n"),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Dialect::Markdown),
            "wiki" | "jira" => Ok(Dialect::Wiki),
            other => Err(format!("unknown dialect '{other}' (expected markdown or wiki)")),
        }
    }
}
