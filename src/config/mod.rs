// SPDX-License-Identifier: MPL-2.0
//! This module handles the pipeline configuration: where the source image
//! lives, where the `mipmap-*` folders go, which densities to produce and
//! how to encode them. It can be loaded from and saved to a TOML file.
//!
//! # Examples
//!
//! ```no_run
//! use mipmap_forge::config::{self, Config};
//! use mipmap_forge::media::OutputFormat;
//! use std::path::PathBuf;
//!
//! // Start from the defaults of a standard Android module
//! let mut config = Config::default();
//!
//! // Emit lossless PNG instead of WebP
//! config.format = OutputFormat::Png;
//!
//! // To load/save from a specific path
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! let temp_file = temp_dir.join("mipmap-forge.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.format, OutputFormat::Png);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::domain::DensitySpec;
use crate::error::{Error, Result};
use crate::media::OutputFormat;
use defaults::{
    DEFAULT_DENSITIES, DEFAULT_OUTPUT_ROOT, DEFAULT_QUALITY, DEFAULT_SOURCE_PATH, MAX_BASE_SIZE,
    MAX_QUALITY,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const APP_NAME: &str = "mipmap-forge";

/// Everything the pipeline needs for one run.
///
/// Missing fields in a config file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source_path: PathBuf,
    pub output_root: PathBuf,
    /// Lossy encoder quality, 0..=100. Ignored by lossless formats.
    pub quality: u8,
    pub format: OutputFormat,
    /// Processed in order.
    pub densities: Vec<DensitySpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            densities: default_densities(),
            quality: DEFAULT_QUALITY,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Checks the values the pipeline relies on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the quality is above 100, the density
    /// table is empty, a label is empty or repeated, or a base size is zero
    /// or larger than [`MAX_BASE_SIZE`].
    pub fn validate(&self) -> Result<()> {
        if self.quality > MAX_QUALITY {
            return Err(Error::Config(format!(
                "quality must be between 0 and {MAX_QUALITY}, got {}",
                self.quality
            )));
        }
        if self.densities.is_empty() {
            return Err(Error::Config("density table is empty".into()));
        }

        let mut seen = HashSet::new();
        for density in &self.densities {
            if density.label.trim().is_empty() {
                return Err(Error::Config("density label must not be empty".into()));
            }
            if !seen.insert(density.label.as_str()) {
                return Err(Error::Config(format!(
                    "density '{}' is listed more than once",
                    density.label
                )));
            }
            if density.base_size == 0 || density.base_size > MAX_BASE_SIZE {
                return Err(Error::Config(format!(
                    "density '{}' has base size {}, expected 1..={MAX_BASE_SIZE}",
                    density.label, density.base_size
                )));
            }
        }
        Ok(())
    }
}

/// The standard Android density table (mdpi through xxxhdpi).
#[must_use]
pub fn default_densities() -> Vec<DensitySpec> {
    DEFAULT_DENSITIES
        .iter()
        .map(|(label, size)| DensitySpec::new(*label, *size))
        .collect()
}

/// Per-user config file location, if the platform has a config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the per-user config file, or the defaults when there is none.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Loads a config from a TOML file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML or has fields of the wrong type.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
    Ok(toml::from_str(&content)?)
}

/// Writes a config as pretty TOML, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_android_module_layout() {
        let config = Config::default();
        assert_eq!(config.source_path, PathBuf::from(DEFAULT_SOURCE_PATH));
        assert_eq!(config.output_root, PathBuf::from(DEFAULT_OUTPUT_ROOT));
        assert_eq!(config.quality, 95);
        assert_eq!(config.format, OutputFormat::WebP);
        assert_eq!(config.densities.len(), 5);
        assert_eq!(config.densities[0], DensitySpec::new("mdpi", 48));
        assert_eq!(config.densities[4], DensitySpec::new("xxxhdpi", 192));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            source_path: PathBuf::from("icons/source.png"),
            output_root: PathBuf::from("out/res"),
            densities: vec![DensitySpec::new("hdpi", 72)],
            quality: 80,
            format: OutputFormat::Png,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "quality = 70\nformat = \"png\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.quality, 70);
        assert_eq!(loaded.format, OutputFormat::Png);
        assert_eq!(loaded.densities, default_densities());
        assert_eq!(loaded.source_path, PathBuf::from(DEFAULT_SOURCE_PATH));
    }

    #[test]
    fn density_table_can_be_overridden() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[[densities]]\nlabel = \"ldpi\"\nbase_size = 36\n",
        )
        .expect("write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.densities, vec![DensitySpec::new("ldpi", 36)]);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let err = load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn validate_rejects_quality_above_100() {
        let config = Config {
            quality: 101,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn validate_rejects_empty_table() {
        let config = Config {
            densities: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn validate_rejects_duplicate_labels() {
        let config = Config {
            densities: vec![DensitySpec::new("mdpi", 48), DensitySpec::new("mdpi", 72)],
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn validate_rejects_zero_and_oversized_base() {
        for size in [0, MAX_BASE_SIZE + 1] {
            let config = Config {
                densities: vec![DensitySpec::new("mdpi", size)],
                ..Config::default()
            };
            assert!(matches!(config.validate(), Err(Error::Config(_))), "size {size}");
        }
    }

    #[test]
    fn validate_rejects_blank_label() {
        let config = Config {
            densities: vec![DensitySpec::new("  ", 48)],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
