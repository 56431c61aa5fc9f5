//! Configuration handed to the environment at construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Settings for one validation run.
///
/// Hosts either build this in code or load it from a TOML file. All
/// fields default to empty, so a partial file is fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Free-form validator parameters.
    #[serde(default)]
    pub params: BTreeMap<String, String>,

    /// Exclusion entries in `checker:pattern` form.
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Assertion queries forwarded to validators verbatim.
    #[serde(default)]
    pub asserts: Vec<String>,

    /// Source encoding; unset or empty reads as UTF-8.
    #[serde(default)]
    pub encoding: Option<String>,
}

impl EnvConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Sets a parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Appends an exclusion entry.
    #[must_use]
    pub fn with_exclude(mut self, entry: impl Into<String>) -> Self {
        self.excludes.push(entry.into());
        self
    }

    /// Appends an assertion query.
    #[must_use]
    pub fn with_assert(mut self, query: impl Into<String>) -> Self {
        self.asserts.push(query.into());
        self
    }

    /// Sets the source encoding.
    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Gets a parameter with a default value.
    #[must_use]
    pub fn param<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.params.get(name).map_or(default, String::as_str)
    }

    /// Gets an integer parameter with a default value.
    ///
    /// Missing or unparseable values fall back to the default.
    #[must_use]
    pub fn param_int(&self, name: &str, default: i64) -> i64 {
        self.params
            .get(name)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Gets a boolean parameter with a default value.
    ///
    /// Missing or unparseable values fall back to the default.
    #[must_use]
    pub fn param_flag(&self, name: &str, default: bool) -> bool {
        self.params
            .get(name)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
