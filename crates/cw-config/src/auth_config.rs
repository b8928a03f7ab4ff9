use crate::{ConfigError, ConfigErrorResult, DEFAULT_HASH_MAX_CONCURRENT, DEFAULT_TOKEN_TTL_SECS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; the process refuses to start
    /// without it.
    pub jwt_secret: Option<String>,
    /// Token lifetime in seconds
    pub token_ttl_secs: u64,
    /// Argon2 iteration count. Required positive integer.
    pub hash_cost: Option<u32>,
    /// Upper bound on concurrent hashing operations
    pub hash_max_concurrent: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            hash_cost: None,
            hash_max_concurrent: DEFAULT_HASH_MAX_CONCURRENT,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.jwt_secret.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::auth(
                "auth.jwt_secret must be set (config.toml or CW_AUTH_JWT_SECRET)",
            ));
        }

        match self.hash_cost {
            None => {
                return Err(ConfigError::auth(
                    "auth.hash_cost must be set (config.toml or CW_AUTH_HASH_COST)",
                ));
            }
            Some(0) => {
                return Err(ConfigError::auth("auth.hash_cost must be a positive integer"));
            }
            Some(_) => {}
        }

        if self.token_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be positive"));
        }

        if self.hash_max_concurrent == 0 {
            return Err(ConfigError::auth(
                "auth.hash_max_concurrent must be positive",
            ));
        }

        Ok(())
    }
}
