//! Session configuration

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use tm_core::store::validate_key;
use tm_core::task::DEFAULT_STORAGE_KEY;
use tm_core::view::DEFAULT_PAGE_SIZE;
use tm_core::{Error, Result};

/// Tunables for a [`TaskSession`](crate::TaskSession)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Name of the slot holding the collection
    pub storage_key: String,
    pub page_size: NonZeroUsize,
    /// Seed the demo tasks when the loaded collection is empty
    pub seed_demo_on_empty: bool,
    /// Description length shown in list rows before truncation
    pub preview_width: usize,
    /// Maximum numbered page links shown at once
    pub page_window: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            seed_demo_on_empty: true,
            preview_width: 120,
            page_window: 5,
        }
    }
}

impl SessionConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_key(&self.storage_key)
            .map_err(|e| Error::InvalidConfig(format!("storageKey: {}", e)))?;
        if self.preview_width == 0 {
            return Err(Error::InvalidConfig("previewWidth must be positive".to_string()));
        }
        if self.page_window == 0 {
            return Err(Error::InvalidConfig("pageWindow must be positive".to_string()));
        }
        Ok(())
    }

    /// Disable demo seeding
    pub fn without_demo(mut self) -> Self {
        self.seed_demo_on_empty = false;
        self
    }

    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.storage_key, "tm_tasks_v1");
        assert_eq!(config.page_size.get(), 6);
        assert!(config.seed_demo_on_empty);
        assert_eq!(config.preview_width, 120);
        assert_eq!(config.page_window, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config =
            SessionConfig::from_json_str(r#"{"pageSize": 10, "seedDemoOnEmpty": false}"#).unwrap();
        assert_eq!(config.page_size.get(), 10);
        assert!(!config.seed_demo_on_empty);
        assert_eq!(config.storage_key, "tm_tasks_v1");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = SessionConfig::from_json_str(r#"{"pageSize": 0}"#);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        for content in [
            r#"{"storageKey": ""}"#,
            r#"{"storageKey": "../tasks"}"#,
            r#"{"previewWidth": 0}"#,
            r#"{"pageWindow": 0}"#,
        ] {
            match SessionConfig::from_json_str(content) {
                Err(Error::InvalidConfig(_)) => {}
                other => panic!("Expected InvalidConfig for {}, got: {:?}", content, other),
            }
        }
    }
}
