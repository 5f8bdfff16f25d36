//! Subcommand implementations.

use anyhow::{Context, Result};
use cpp_inspector_core::Config;
use std::path::Path;

pub mod check;
pub mod list_rules;
pub mod output;
pub mod tree;

/// Config file looked up in the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "cpp-inspector.toml";

/// Loads the config from `--config`, falling back to `cpp-inspector.toml`
/// in the working directory, then to the permissive default.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(p) => {
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if default.is_file() {
                tracing::debug!("Using config file: {}", default.display());
                Config::from_file(default)
                    .with_context(|| format!("Failed to load config: {}", default.display()))
            } else {
                Ok(Config::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_default() {
        let config = load_config(None).unwrap();
        assert!(config.is_rule_enabled("class-decl"));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        std::fs::write(&path, "[rules.class-decl]\nenabled = false\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert!(!config.is_rule_enabled("class-decl"));
        assert!(config.is_rule_enabled("field-decl"));
    }

    #[test]
    fn unreadable_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load_config(Some(&path)).is_err());
    }
}
