//! Filesystem port for drafts and attachments.

use std::path::Path;

/// Boxed error returned by port implementations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Filesystem access used by the draft store and the attachment intake.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Writes the given contents to a file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Lists the entry names of a directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a readable directory.
    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PortError>;

    /// Size of a regular file in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is missing or not a file.
    fn file_size(&self, path: &Path) -> Result<u64, PortError>;
}
