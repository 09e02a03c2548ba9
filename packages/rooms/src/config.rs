//! # Application configuration: `inventory.toml`
//!
//! The web binary embeds this file at build time and hands the parsed
//! [`InventoryConfig`] to every view through context.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:9192"   # REST backend
//!
//! [rooms]
//! per_page = 8                         # rows per page in the rooms table
//!
//! [banner]
//! clear_after_secs = 3                 # transient banner lifetime
//!
//! [search]
//! loading_delay_ms = 2000              # how long "searching..." stays up
//! ```
//!
//! Every section is `#[serde(default)]`, so an empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

use crate::listing::DEFAULT_ROOMS_PER_PAGE;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub rooms: RoomsConfig,
    #[serde(default)]
    pub banner: BannerConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:9192".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomsConfig {
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_per_page() -> usize {
    DEFAULT_ROOMS_PER_PAGE
}

impl Default for RoomsConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BannerConfig {
    #[serde(default = "default_clear_after")]
    pub clear_after_secs: u64,
}

fn default_clear_after() -> u64 {
    3
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            clear_after_secs: default_clear_after(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_loading_delay")]
    pub loading_delay_ms: u64,
}

fn default_loading_delay() -> u64 {
    2000
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: default_loading_delay(),
        }
    }
}

impl InventoryConfig {
    /// Builder method to point the client at another backend.
    pub fn with_api_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = InventoryConfig::from_toml("").unwrap();
        assert_eq!(config, InventoryConfig::default());
        assert_eq!(config.rooms.per_page, 8);
        assert_eq!(config.banner.clear_after_secs, 3);
    }

    #[test]
    fn test_partial_sections() {
        let config = InventoryConfig::from_toml("[api]\nbase_url = \"https://hotel.example\"\n[rooms]\n").unwrap();
        assert_eq!(config.api.base_url, "https://hotel.example");
        assert_eq!(config.rooms.per_page, 8);
        assert_eq!(config.search.loading_delay_ms, 2000);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = InventoryConfig::default().with_api_url("http://127.0.0.1:8080/");
        let parsed = InventoryConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.api.base_url, "http://127.0.0.1:8080");
        assert_eq!(parsed, config);
    }
}
