//! ID generator port.

/// Produces identifiers for drafts and attachment handles.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
