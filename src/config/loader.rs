//! Configuration file discovery and loading.
//!
//! Layers are merged in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. User global config (`~/.pixelbuddy/config.yml`)
//! 3. Explicit config passed with `--config`
//! 4. Environment variables (`PIXELBUDDY_STORE_URL`, `PIXELBUDDY_LANGUAGE`,
//!    `PIXELBUDDY_MAX_RESULTS`)

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::config::merger::{deep_merge, merge_layers};
use crate::config::schema::PixelBuddyConfig;
use crate::config::validator::validate;
use crate::error::{PixelBuddyError, Result};

/// Overrides `store.base_url`.
pub const ENV_STORE_URL: &str = "PIXELBUDDY_STORE_URL";
/// Overrides `store.language`.
pub const ENV_LANGUAGE: &str = "PIXELBUDDY_LANGUAGE";
/// Overrides `store.max_results`.
pub const ENV_MAX_RESULTS: &str = "PIXELBUDDY_MAX_RESULTS";

/// Config files to load, in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.pixelbuddy/config.yml
    pub user_global: Option<PathBuf>,

    /// File named on the command line. Must exist when set.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files, with an optional explicit path.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self {
            user_global: dirs::home_dir().and_then(|home| Self::find_user_global(&home)),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// Find the global config under a home directory.
    pub fn find_user_global(home: &Path) -> Option<PathBuf> {
        let path = home.join(".pixelbuddy").join("config.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Returns all config paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.explicit.iter()).collect()
    }
}

/// Load a config file as a raw YAML value (for merging).
///
/// An empty file reads as an empty mapping.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PixelBuddyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PixelBuddyError::Io(e)
        }
    })?;

    let value: Value =
        serde_yaml::from_str(&content).map_err(|e| PixelBuddyError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(match value {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    })
}

/// Build the environment layer from a variable lookup.
///
/// # Errors
///
/// Returns `ConfigValidationError` if `PIXELBUDDY_MAX_RESULTS` is not a
/// positive integer.
pub fn env_layer(lookup: impl Fn(&str) -> Option<String>) -> Result<Value> {
    let mut store = Mapping::new();

    if let Some(url) = lookup(ENV_STORE_URL) {
        store.insert("base_url".into(), url.into());
    }
    if let Some(language) = lookup(ENV_LANGUAGE) {
        store.insert("language".into(), language.into());
    }
    if let Some(raw) = lookup(ENV_MAX_RESULTS) {
        let max: u64 = raw
            .trim()
            .parse()
            .map_err(|_| PixelBuddyError::ConfigValidationError {
                message: format!("{} must be a positive integer, got '{}'", ENV_MAX_RESULTS, raw),
            })?;
        store.insert("max_results".into(), max.into());
    }

    let mut root = Mapping::new();
    if !store.is_empty() {
        root.insert("store".into(), Value::Mapping(store));
    }
    Ok(Value::Mapping(root))
}

/// Load, merge and validate configuration from the given paths and
/// environment lookup.
pub fn load_config_from(
    paths: &ConfigPaths,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PixelBuddyConfig> {
    let defaults = serde_yaml::to_value(PixelBuddyConfig::default())
        .map_err(|e| anyhow::anyhow!("Failed to serialize default config: {}", e))?;

    let mut layers = vec![defaults];
    for path in paths.all() {
        debug!("Loading config from {}", path.display());
        layers.push(load_config_value(path)?);
    }
    let merged = deep_merge(&merge_layers(&layers), &env_layer(lookup)?);

    let config: PixelBuddyConfig =
        serde_yaml::from_value(merged).map_err(|e| PixelBuddyError::ConfigParseError {
            path: paths
                .explicit
                .clone()
                .or_else(|| paths.user_global.clone())
                .unwrap_or_default(),
            message: format!("Failed to parse merged config: {}", e),
        })?;

    validate(&config)?;
    Ok(config)
}

/// Load configuration for this process: discovered files plus the real
/// environment.
pub fn load_config(explicit: Option<&Path>) -> Result<PixelBuddyConfig> {
    load_config_from(&ConfigPaths::discover(explicit), |key| {
        std::env::var(key).ok()
    })
}
