//! Configuration validation rules.
//!
//! - `store.base_url` must be an http(s) URL
//! - `store.max_results` must be at least 1
//! - Both timeouts must be at least one second
//! - Hardware overrides must not be negative

use crate::config::schema::PixelBuddyConfig;
use crate::error::{PixelBuddyError, Result};

/// A single failed rule.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return every failed rule.
pub fn validate_config(config: &PixelBuddyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let store = &config.store;

    if !(store.base_url.starts_with("http://") || store.base_url.starts_with("https://")) {
        errors.push(ValidationError::new(
            "invalid-base-url",
            format!("store.base_url '{}' must start with http:// or https://", store.base_url),
        ));
    }

    if store.max_results == 0 {
        errors.push(ValidationError::new(
            "invalid-max-results",
            "store.max_results must be at least 1",
        ));
    }

    for (name, secs) in [
        ("search_timeout_secs", store.search_timeout_secs),
        ("fetch_timeout_secs", store.fetch_timeout_secs),
    ] {
        if secs == 0 {
            errors.push(ValidationError::new(
                "invalid-timeout",
                format!("store.{} must be at least 1", name),
            ));
        }
    }

    for (name, value) in [
        ("ram_gb", config.hardware.ram_gb),
        ("vram_mb", config.hardware.vram_mb),
    ] {
        if value.is_some_and(|v| v.is_nan() || v < 0.0) {
            errors.push(ValidationError::new(
                "invalid-hardware",
                format!("hardware.{} must be a non-negative number", name),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &PixelBuddyConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(PixelBuddyError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
