//! Configuration for cpp-inspector.
//!
//! A project may carry an optional `cpp-inspector.toml` next to its sources
//! to disable individual rules or adjust how the clang front end is invoked:
//!
//! ```toml
//! [frontend]
//! compiler = "clang-18"
//! extra_args = ["-std=c++17"]
//!
//! [rules.c-style-cast]
//! enabled = false
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Top-level configuration. Everything is optional; the default runs all
/// rules against plain `clang`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Front-end (clang invocation) settings.
    #[serde(default)]
    pub frontend: FrontEndConfig,

    /// Per-rule configurations keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates the permissive default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// does not match the schema.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Whether a rule should run. Unlisted rules are enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        match self.rules.get(rule_name) {
            Some(rule) => rule.enabled.unwrap_or(true),
            None => true,
        }
    }
}

/// Settings for the clang invocation that produces the dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontEndConfig {
    /// Compiler binary to invoke.
    #[serde(default = "default_compiler")]
    pub compiler: String,

    /// Extra arguments appended to the dump invocation, such as `-std=c++17`
    /// or include paths.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for FrontEndConfig {
    fn default() -> Self {
        Self {
            compiler: default_compiler(),
            extra_args: Vec::new(),
        }
    }
}

fn default_compiler() -> String {
    "clang".to_string()
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Set to `false` to skip the rule entirely.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The content was not valid TOML or did not match the schema.
    #[error("invalid config: {0}")]
    Invalid(#[from] toml::de::Error),
}
