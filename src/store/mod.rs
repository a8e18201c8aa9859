//! Draft store: persistence of task documents between wizard runs.
//!
//! Drafts are YAML files kept under the store root, written and read
//! through the `FileSystem` port:
//!
//! ```text
//! <root>/
//!   └── tasks/
//!         └── <id>.yaml
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::context::ServiceContext;
use crate::document::TaskDocument;

/// Errors raised by the draft store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The ID contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid draft id '{0}'")]
    InvalidId(String),
    /// No draft with that ID.
    #[error("draft {0} not found")]
    NotFound(String),
    /// Reading or writing failed.
    #[error("failed to {action} draft {id}: {reason}")]
    Io {
        /// What was attempted.
        action: &'static str,
        /// Draft ID.
        id: String,
        /// Underlying error text.
        reason: String,
    },
    /// The draft is not a valid task document.
    #[error("failed to parse draft {id}: {source}")]
    Parse {
        /// Draft ID.
        id: String,
        /// YAML error.
        #[source]
        source: serde_yaml::Error,
    },
    /// The document could not be serialized.
    #[error("failed to serialize draft {id}: {source}")]
    Serialize {
        /// Draft ID.
        id: String,
        /// YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Persistence layer for task document drafts.
pub struct DraftStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
}

impl<'a> DraftStore<'a> {
    /// Creates a store rooted at `root`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, root: root.to_path_buf() }
    }

    /// Saves `doc` under a freshly generated ID and returns the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn create(&self, doc: &TaskDocument) -> Result<String, StoreError> {
        let id = self.ctx.id_gen.generate_id();
        self.save(&id, doc)?;
        Ok(id)
    }

    /// Writes `doc` to `<root>/tasks/<id>.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid IDs or when serialization or writing fails.
    pub fn save(&self, id: &str, doc: &TaskDocument) -> Result<(), StoreError> {
        let path = self.draft_path(id)?;
        let yaml = serde_yaml::to_string(doc)
            .map_err(|source| StoreError::Serialize { id: id.to_string(), source })?;
        self.ctx.fs.write(&path, &yaml).map_err(|e| StoreError::Io {
            action: "write",
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        info!(%id, path = %path.display(), "draft saved");
        Ok(())
    }

    /// Loads the draft `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the draft does not exist and
    /// other variants when it cannot be read or parsed.
    pub fn load(&self, id: &str) -> Result<TaskDocument, StoreError> {
        let path = self.draft_path(id)?;
        if !self.ctx.fs.exists(&path) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let contents = self.ctx.fs.read_to_string(&path).map_err(|e| StoreError::Io {
            action: "read",
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&contents).map_err(|source| StoreError::Parse { id: id.to_string(), source })
    }

    /// Lists draft IDs, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the tasks directory cannot be listed.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let tasks_dir = self.root.join("tasks");
        if !self.ctx.fs.exists(&tasks_dir) {
            return Ok(Vec::new());
        }
        let entries = self.ctx.fs.list_dir(&tasks_dir).map_err(|e| StoreError::Io {
            action: "list",
            id: "*".to_string(),
            reason: e.to_string(),
        })?;
        Ok(entries
            .into_iter()
            .filter_map(|name| name.strip_suffix(".yaml").map(String::from))
            .collect())
    }

    fn draft_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        let valid = !id.is_empty()
            && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(self.root.join("tasks").join(format!("{id}.yaml")))
    }
}
