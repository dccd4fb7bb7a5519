//! Configuration file discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use super::fragment::ConfigFragment;
use super::resolver::ConfigSet;
use crate::{FlatlintError, Result};

/// Config file names probed during auto-discovery, in priority order
const CONFIG_FILE_NAMES: &[&str] = &[
    "flatlint.config.jsonc",
    "flatlint.config.json",
    "flatlint.config.yaml",
    "flatlint.config.yml",
];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover a config file by traversing upward from start_path
    ///
    /// Probes `flatlint.config.jsonc`, `flatlint.config.json`,
    /// `flatlint.config.yaml` and `flatlint.config.yml` in that order,
    /// starting from the given directory and moving up the directory tree
    /// until a config is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| FlatlintError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.exists() && config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Load the raw fragment sequence from a specific file
    ///
    /// The format is selected by extension: `.jsonc` (JSON with comments and
    /// trailing commas), `.json`, `.yaml` or `.yml`. The file content must be
    /// a top-level sequence of fragments.
    pub fn load_fragments(path: &Path) -> Result<Vec<ConfigFragment>> {
        let content =
            fs::read_to_string(path).map_err(|e| FlatlintError::io_error(path, e))?;
        let ext = path.extension().and_then(|e| e.to_str());

        let parse_error = |e: &dyn std::fmt::Display| {
            FlatlintError::config_error(format!(
                "Failed to parse config '{}': {}",
                path.display(),
                e
            ))
        };

        match ext {
            Some("jsonc") => json5::from_str(&content).map_err(|e| parse_error(&e)),
            Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(&e)),
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(&e))
            }
            _ => Err(FlatlintError::config_error(format!(
                "Unsupported config extension for '{}' (expected .jsonc, .json, .yaml, or .yml)",
                path.display()
            ))),
        }
    }

    /// Load and compile a configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<ConfigSet> {
        ConfigSet::compile(Self::load_fragments(path)?)
    }

    /// Load config from path or auto-discover
    ///
    /// If a custom path is provided, loads from that path. Otherwise,
    /// attempts to auto-discover a config file starting from the given
    /// directory (or the current directory).
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<ConfigSet> {
        let config_path = if let Some(path) = custom_path {
            if !path.exists() {
                return Err(FlatlintError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        } else {
            let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
            let current_dir = search_dir.canonicalize().map_err(|e| {
                FlatlintError::config_error(format!("Failed to resolve directory: {e}"))
            })?;

            Self::auto_discover(&current_dir)?.ok_or_else(|| {
                FlatlintError::config_error(format!(
                    "No config file found (expected one of: {})",
                    CONFIG_FILE_NAMES.join(", ")
                ))
            })?
        };

        Self::load_from_file(&config_path)
    }
}
