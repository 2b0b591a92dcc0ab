//! Configuration file support for calculate-releases.
//!
//! Provides YAML-based configuration through `calculate-releases.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "calculate-releases.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub build_file: Option<String>,
    pub module_name: Option<String>,
    pub base: Option<String>,
    pub head: Option<String>,
    pub primary_branch: Option<String>,
    pub go_binary: Option<String>,
    pub include_rename_sources: Option<bool>,
    pub ignore_folders: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes to unit, not to an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let required = [
        ("module_name", &config.module_name),
        ("build_file", &config.build_file),
        ("go_binary", &config.go_binary),
        ("primary_branch", &config.primary_branch),
    ];
    for (field, value) in required {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default value.",
                field
            );
        }
    }

    if let Some(ref folders) = config.ignore_folders {
        for (i, folder) in folders.iter().enumerate() {
            if folder.trim().is_empty() {
                bail!(
                    "Invalid config: ignore_folders[{}] must not be empty.\n\n\
                     💡 Hint: Each ignore_folders entry must be a repository-relative folder (e.g., \".buildkite\").",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored.", key);
    }
}
