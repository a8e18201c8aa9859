//! Runtime configuration from the environment.

use std::path::PathBuf;

use thiserror::Error;

use crate::render::Dialect;
use crate::validate::Strictness;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set to something unusable.
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Settings shared by every command. Command-line flags override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Draft store root (`TASKWIZ_STORE`, default `.taskwiz`).
    pub store_root: PathBuf,
    /// Default validation mode (`TASKWIZ_MODE`, default `strict`).
    pub strictness: Strictness,
    /// Default export dialect (`TASKWIZ_DIALECT`, default `markdown`).
    pub dialect: Dialect,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from(".taskwiz"),
            strictness: Strictness::Strict,
            dialect: Dialect::Markdown,
        }
    }
}

impl Config {
    /// Loads `.env` when present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown mode or dialect.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown mode or dialect.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let store_root = lookup("TASKWIZ_STORE")
            .filter(|value| !value.trim().is_empty())
            .map_or(defaults.store_root, PathBuf::from);

        let strictness = match lookup("TASKWIZ_MODE") {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidValue("TASKWIZ_MODE".to_string(), e))?,
            None => defaults.strictness,
        };

        let dialect = match lookup("TASKWIZ_DIALECT") {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidValue("TASKWIZ_DIALECT".to_string(), e))?,
            None => defaults.dialect,
        };

        Ok(Self { store_root, strictness, dialect })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("TASKWIZ_STORE", "/tmp/drafts"),
            ("TASKWIZ_MODE", "lenient"),
            ("TASKWIZ_DIALECT", "wiki"),
        ]))
        .unwrap();
        assert_eq!(config.store_root, PathBuf::from("/tmp/drafts"));
        assert_eq!(config.strictness, Strictness::Lenient);
        assert_eq!(config.dialect, Dialect::Wiki);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = Config::from_lookup(lookup(&[("TASKWIZ_MODE", "relaxed")])).unwrap_err();
        assert!(err.to_string().contains("TASKWIZ_MODE"));
    }
}
