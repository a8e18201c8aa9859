//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::document::FieldKey;
use crate::render::Dialect;
use crate::validate::Strictness;

/// Top-level CLI parser for `taskwiz`.
#[derive(Debug, Parser)]
#[command(name = "taskwiz", version, about = "Collect, validate and export task specifications")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new draft and print its ID.
    New {
        /// Start from a filled example instead of the empty form.
        #[arg(long)]
        sample: bool,
    },
    /// List drafts in the store.
    List,
    /// Show a draft with per-step status.
    Show {
        /// Draft ID.
        id: String,
        /// Validation mode (defaults to TASKWIZ_MODE).
        #[arg(long)]
        mode: Option<Strictness>,
    },
    /// Validate one field or every field of a draft.
    Validate {
        /// Draft ID.
        id: String,
        /// Field to validate (objective, acceptance, tech, api, ui, notes).
        #[arg(long)]
        step: Option<FieldKey>,
        /// Validation mode (defaults to TASKWIZ_MODE).
        #[arg(long)]
        mode: Option<Strictness>,
    },
    /// Walk the wizard over a draft, stopping at the first blocked step.
    Walk {
        /// Draft ID.
        id: String,
        /// Validation mode (defaults to TASKWIZ_MODE).
        #[arg(long)]
        mode: Option<Strictness>,
    },
    /// Attach a design image to a UI entry.
    Attach {
        /// Draft ID.
        id: String,
        /// 1-based UI entry number; a new entry is appended when it is one past the end.
        #[arg(long)]
        ui: usize,
        /// Image file.
        image: PathBuf,
    },
    /// Remove the design image of a UI entry.
    Detach {
        /// Draft ID.
        id: String,
        /// 1-based UI entry number.
        #[arg(long)]
        ui: usize,
    },
    /// Pretty-print JSON request and response payloads in place.
    Fmt {
        /// Draft ID.
        id: String,
    },
    /// Export a draft once every step validates.
    Render {
        /// Draft ID.
        id: String,
        /// Output dialect (defaults to TASKWIZ_DIALECT).
        #[arg(long)]
        dialect: Option<Dialect>,
        /// Validation mode (defaults to TASKWIZ_MODE).
        #[arg(long)]
        mode: Option<Strictness>,
    },
}
