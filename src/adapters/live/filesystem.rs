//! Filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::{FileSystem, PortError};

/// Real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PortError> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            if let Some(name) = entry?.file_name().to_str() {
                entries.push(name.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }

    fn file_size(&self, path: &Path) -> Result<u64, PortError> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(format!("{} is not a file", path.display()).into());
        }
        Ok(metadata.len())
    }
}
