//! Configuration file support for word-counter.
//!
//! Provides YAML-based configuration through `word-counter.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::{OutputFormat, SortOrder};
use crate::shared::error::WordCountError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "word-counter.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub sort: Option<String>,
    pub show_banner: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`; `None` when absent. Values are checked at load time.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|s| s.parse().ok())
    }

    /// Parsed `sort`; `None` when absent. Values are checked at load time.
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub sort: SortOrder,
    pub show_banner: bool,
}

impl Settings {
    /// CLI values win; then the config file; then built-in defaults.
    pub fn merge(
        cli_format: Option<OutputFormat>,
        cli_sort: Option<SortOrder>,
        quiet: bool,
        config: Option<&ConfigFile>,
    ) -> Self {
        let format = cli_format
            .or_else(|| config.and_then(ConfigFile::output_format))
            .unwrap_or_default();
        let sort = cli_sort
            .or_else(|| config.and_then(ConfigFile::sort_order))
            .unwrap_or_default();
        let show_banner = !quiet && config.and_then(|c| c.show_banner).unwrap_or(true);

        Self {
            format,
            sort,
            show_banner,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    log::debug!("Loaded config file {}", path.display());
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
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        format
            .parse::<OutputFormat>()
            .map_err(|details| WordCountError::InvalidConfig {
                path: path.to_path_buf(),
                details,
            })?;
    }
    if let Some(sort) = config.sort.as_deref() {
        sort.parse::<SortOrder>()
            .map_err(|details| WordCountError::InvalidConfig {
                path: path.to_path_buf(),
                details,
            })?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored.", key);
    }
}
