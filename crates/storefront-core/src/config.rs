//! Configuration
//!
//! Settings for the remote endpoint, toast lifetime and the fallback
//! lookup used by `fetch_by_id`. Every field has a default.

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_TOAST_DURATION_MS;

/// Where `fetch_by_id` looks when it cannot (or does not) ask the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallbackLookup {
    /// The fixed seed items
    #[default]
    Seed,
    /// The current local list
    LocalList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Base URL of the remote item collection
    pub api_url: String,
    /// Lifetime of toasts that don't set one
    pub toast_duration_ms: u32,
    pub fallback_lookup: FallbackLookup,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080/api/items".to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            fallback_lookup: FallbackLookup::default(),
        }
    }
}

impl StorefrontConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError(e.to_string()))
    }
}

/// The configuration document could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StorefrontConfig::from_json("{}").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.fallback_lookup, FallbackLookup::Seed);
    }

    #[test]
    fn test_partial_document() {
        let config = StorefrontConfig::from_json(
            r#"{"api_url": "https://shop.test/api/items", "fallback_lookup": "local_list"}"#,
        )
        .unwrap();
        assert_eq!(config.api_url, "https://shop.test/api/items");
        assert_eq!(config.fallback_lookup, FallbackLookup::LocalList);
        assert_eq!(config.toast_duration_ms, 5000);
    }

    #[test]
    fn test_invalid_document() {
        let err = StorefrontConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
