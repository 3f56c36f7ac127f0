//! Runtime settings
//!
//! Settings come from three layers, highest first: command-line flags (or
//! their environment variables), an optional TOML config file, and the
//! built-in defaults in `core::paths`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{GrocerError, Result};
use crate::core::paths::{default_input, default_snapshot};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.as_os_str();
    if raw.is_empty() {
        return Err(GrocerError::InvalidConfig {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.to_string_lossy().contains('\0') {
        return Err(GrocerError::InvalidConfig {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Contents of a `grocer.toml` file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: InputConfig,
    pub snapshot: SnapshotConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Input used when the prompt is left blank
    pub default_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapshotConfig {
    pub path: Option<PathBuf>,
    pub enabled: Option<bool>,
}

impl FileConfig {
    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GrocerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, origin: &Path) -> Result<Self> {
        let config: FileConfig =
            toml::from_str(content).map_err(|source| GrocerError::ConfigParse {
                path: origin.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input.default_path {
            validate_path("input.default_path", path)?;
        }
        if let Some(path) = &self.snapshot.path {
            validate_path("snapshot.path", path)?;
        }
        Ok(())
    }
}

/// Values given on the command line (or via environment)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub default_input: Option<PathBuf>,
    pub snapshot: Option<PathBuf>,
    pub no_snapshot: bool,
}

/// Fully resolved settings for one session
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Input named on the command line; skips the prompt when set
    pub input: Option<PathBuf>,
    pub default_input: PathBuf,
    /// `None` disables the snapshot
    pub snapshot: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: None,
            default_input: default_input(),
            snapshot: Some(default_snapshot()),
        }
    }
}

impl Settings {
    /// Merge flags over the config file over defaults
    pub fn resolve(overrides: Overrides, file: Option<FileConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let default_input = overrides
            .default_input
            .or(file.input.default_path)
            .unwrap_or_else(default_input);

        let snapshot_enabled = !overrides.no_snapshot && file.snapshot.enabled.unwrap_or(true);
        let snapshot = if snapshot_enabled {
            Some(
                overrides
                    .snapshot
                    .or(file.snapshot.path)
                    .unwrap_or_else(default_snapshot),
            )
        } else {
            None
        };

        let settings = Self {
            input: overrides.input,
            default_input,
            snapshot,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("default_input", &self.default_input)?;
        if let Some(snapshot) = &self.snapshot {
            validate_path("snapshot", snapshot)?;
        }
        Ok(())
    }
}
