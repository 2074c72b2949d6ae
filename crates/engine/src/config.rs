//! Store configuration via `docsearch.toml`
//!
//! The store has no required settings. A missing config file means
//! defaults; a present file is parsed strictly so typos surface as errors
//! instead of being silently ignored.

use docsearch_search::IndexStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Config file name conventionally used by hosts embedding the store.
pub const CONFIG_FILE_NAME: &str = "docsearch.toml";

/// Errors raised while loading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("failed to access config file '{path}': {source}")]
    Io {
        /// File that was accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file content is not valid
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Document store configuration loaded from `docsearch.toml`.
///
/// # Example
///
/// ```toml
/// # How deleted documents are removed from the index:
/// # "scan" (default) or "reverse_map"
/// index_strategy = "reverse_map"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Index removal strategy: `"scan"` or `"reverse_map"`.
    #[serde(default)]
    pub index_strategy: IndexStrategy,
}

impl StoreConfig {
    /// Config using the given index strategy
    pub fn with_index_strategy(index_strategy: IndexStrategy) -> Self {
        Self { index_strategy }
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            index_strategy = config.index_strategy.as_str(),
            "Loaded store config"
        );
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults if the file is missing.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# docsearch store configuration
#
# How deleted or replaced documents are removed from the index:
#   "scan"        = visit every indexed term (no extra memory)
#   "reverse_map" = track each document's terms, visit only those
index_strategy = "scan"
"#
    }
}
