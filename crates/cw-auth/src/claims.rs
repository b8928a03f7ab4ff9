use crate::{AuthError, Result as AuthErrorResult};

use cw_core::User;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims carried by every issued token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Display name at issue time
    pub name: String,
    /// Privilege flag
    #[serde(default)]
    pub is_admin: bool,
    /// Optional role names for authorization
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Derive the token payload for a user. Expiry is `now + ttl`.
    pub fn for_user(user: &User, ttl: Duration) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: user.id.to_string(),
            name: user.name.clone(),
            is_admin: user.is_admin,
            roles: Vec::new(),
            exp: now + ttl.as_secs() as i64,
            iat: now,
        }
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
