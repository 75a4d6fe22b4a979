//! API-key configuration, loaded through `core_config::FromEnv`.

use std::fmt;
use std::sync::Arc;

use core_config::{ConfigError, FromEnv, env_or_default};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Key used when `API_KEY` is not set.
pub const DEFAULT_API_KEY: &str = "mysecretapikey";

/// Shared-secret configuration.
///
/// Loaded from environment variables:
/// - `API_KEY` (optional) - defaults to [`DEFAULT_API_KEY`]
///
/// `Debug` output redacts the key.
#[derive(Clone)]
pub struct ApiKeyConfig {
    key: Arc<str>,
}

impl ApiKeyConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Arc::from(key.into()),
        }
    }

    /// Exact, case-sensitive comparison against the configured key.
    pub fn matches(&self, candidate: &str) -> bool {
        *self.key == *candidate
    }
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY)
    }
}

impl fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("header", &API_KEY_HEADER)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let key = env_or_default("API_KEY", DEFAULT_API_KEY);

        if key.is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self::new(key))
    }
}
