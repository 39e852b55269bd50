//! REPL configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the pokedex REPL.
#[derive(
    Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct ReplConfig {
    /// Base URL for PokeAPI requests
    #[serde(default = "default_base_url")]
    #[builder(default = "default_base_url()")]
    base_url: String,

    /// Seconds a cached API response stays fresh
    #[serde(default = "default_cache_ttl_secs")]
    #[builder(default = "default_cache_ttl_secs()")]
    cache_ttl_secs: u64,
}

fn default_base_url() -> String {
    pokedex_api::DEFAULT_BASE_URL.to_string()
}

fn default_cache_ttl_secs() -> u64 {
    5
}

impl ReplConfig {
    /// Cache TTL as a duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}
