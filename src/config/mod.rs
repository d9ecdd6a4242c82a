//! Configuration loading, merging, and validation for PixelBuddy.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use pixelbuddy::config::{load_config_from, ConfigPaths};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("pixelbuddy.yml");
//! fs::write(&path, "store:\n  max_results: 3\n").unwrap();
//!
//! let paths = ConfigPaths { user_global: None, explicit: Some(path) };
//! let config = load_config_from(&paths, |_| None).unwrap();
//! assert_eq!(config.store.max_results, 3);
//! assert_eq!(config.store.language, "english");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    env_layer, load_config, load_config_from, load_config_value, ConfigPaths, ENV_LANGUAGE,
    ENV_MAX_RESULTS, ENV_STORE_URL,
};
pub use merger::{deep_merge, merge_layers};
pub use schema::{PixelBuddyConfig, StoreSettings, DEFAULT_STORE_URL};
pub use validator::{validate, validate_config, ValidationError};
