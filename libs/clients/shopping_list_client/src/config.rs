use core_config::{ConfigError, FromEnv, env_or_default};

pub const DEFAULT_API_URL: &str = "http://localhost:8082";

/// Where the shopping list API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl FromEnv for ClientConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(env_or_default("SHOPPING_LIST_API_URL", DEFAULT_API_URL)))
    }
}
