//! # Trellis Client Configuration Loading
//!
//! Asynchronous loading of configuration key-value stores by path.
//!
//! A configuration file is fetched through a [`ConfigSource`] (the default
//! [`FileSource`] reads the local filesystem via tokio), parsed according
//! to its extension, and delivered as a flat map of option names to JSON
//! values. Relative paths are resolved against the source's base
//! directory. YAML and TOML support are gated behind the `yaml-config` and
//! `toml-config` features.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::warn;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognized config format for '{0}'")]
    UnknownFormat(PathBuf),

    #[error("failed to parse {format} config '{path}': {message}")]
    Parse {
        format: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("config root of '{0}' is not a mapping")]
    NotAMapping(PathBuf),
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// Where configuration text comes from.
///
/// The seam exists so tests and embedders can substitute a non-filesystem
/// source; the library ships [`FileSource`].
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Base directory against which relative paths are resolved.
    fn base_dir(&self) -> &Path;

    /// Fetch the raw text at `path` (already resolved).
    async fn fetch(&self, path: &Path) -> std::io::Result<String>;
}

/// Filesystem-backed config source.
#[derive(Debug, Clone)]
pub struct FileSource {
    base: PathBuf,
}

impl FileSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(".")
    }
}

#[async_trait]
impl ConfigSource for FileSource {
    fn base_dir(&self) -> &Path {
        &self.base
    }

    async fn fetch(&self, path: &Path) -> std::io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

/// Loads a configuration map from `path` using the default filesystem
/// source, resolving relative paths against the current directory.
pub async fn load_config(path: impl AsRef<Path>) -> Result<HashMap<String, Value>, ConfigError> {
    load_config_from(&FileSource::default(), path).await
}

/// Loads a configuration map from `path` through `source`.
///
/// The file's extension selects the parser; the parsed document must be a
/// mapping at the top level.
pub async fn load_config_from(
    source: &dyn ConfigSource,
    path: impl AsRef<Path>,
) -> Result<HashMap<String, Value>, ConfigError> {
    let path = path.as_ref();
    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        source.base_dir().join(path)
    };

    let format =
        ConfigFormat::from_path(&resolved).ok_or_else(|| ConfigError::UnknownFormat(resolved.clone()))?;

    let text = source.fetch(&resolved).await.map_err(|source| {
        warn!("config fetch failed for '{}': {}", resolved.display(), source);
        ConfigError::Io {
            path: resolved.clone(),
            source,
        }
    })?;

    let value = parse_config(format, &text, &resolved)?;
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(ConfigError::NotAMapping(resolved)),
    }
}

fn parse_config(format: ConfigFormat, text: &str, path: &Path) -> Result<Value, ConfigError> {
    match format {
        ConfigFormat::Json => serde_json::from_str(text).map_err(|e| ConfigError::Parse {
            format: "JSON",
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        #[cfg(feature = "yaml-config")]
        ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| ConfigError::Parse {
            format: "YAML",
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        #[cfg(feature = "toml-config")]
        ConfigFormat::Toml => toml::from_str(text).map_err(|e| ConfigError::Parse {
            format: "TOML",
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}
