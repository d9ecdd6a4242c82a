//! Configuration schema definitions for PixelBuddy.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::{Deserialize, Serialize};

use crate::hardware::HardwareOverrides;

/// Root configuration structure for `config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelBuddyConfig {
    /// Store access settings.
    pub store: StoreSettings,

    /// Manual hardware values that replace probed ones
    #[serde(skip_serializing_if = "is_default_overrides")]
    pub hardware: HardwareOverrides,
}

/// Settings for talking to the Steam store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Store base URL, without a trailing slash.
    pub base_url: String,

    /// Language requested for store pages and API responses.
    pub language: String,

    /// Number of search results to consider.
    pub max_results: usize,

    /// Timeout for the title search request, in seconds.
    pub search_timeout_secs: u64,

    /// Timeout for the requirement fetch, in seconds.
    pub fetch_timeout_secs: u64,
}

/// Public Steam store.
pub const DEFAULT_STORE_URL: &str = "https://store.steampowered.com";

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORE_URL.to_string(),
            language: "english".to_string(),
            max_results: 5,
            search_timeout_secs: 30,
            fetch_timeout_secs: 5,
        }
    }
}

fn is_default_overrides(overrides: &HardwareOverrides) -> bool {
    *overrides == HardwareOverrides::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PixelBuddyConfig::default();
        assert_eq!(config.store.base_url, "https://store.steampowered.com");
        assert_eq!(config.store.language, "english");
        assert_eq!(config.store.max_results, 5);
        assert_eq!(config.store.search_timeout_secs, 30);
        assert_eq!(config.store.fetch_timeout_secs, 5);
        assert_eq!(config.hardware, HardwareOverrides::default());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: PixelBuddyConfig = serde_yaml::from_str("store:\n  max_results: 10\n").unwrap();
        assert_eq!(config.store.max_results, 10);
        assert_eq!(config.store.fetch_timeout_secs, 5);
    }

    #[test]
    fn hardware_overrides_from_yaml() {
        let yaml = "hardware:\n  gpu: RTX 3070\n  vram_mb: 8192\n";
        let config: PixelBuddyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.hardware.gpu.as_deref(), Some("RTX 3070"));
        assert_eq!(config.hardware.vram_mb, Some(8192.0));
        assert_eq!(config.hardware.cpu, None);
    }

    #[test]
    fn default_overrides_are_not_serialized() {
        let yaml = serde_yaml::to_string(&PixelBuddyConfig::default()).unwrap();
        assert!(yaml.contains("base_url"));
        assert!(!yaml.contains("hardware"));
    }
}
