use crate::{AuthError, Claims, Result as AuthErrorResult};

use cw_core::User;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Signs and verifies compact, expiring identity tokens (HS256).
///
/// The signing secret and token TTL are process-wide, supplied once at
/// startup. There is no revocation: a token stays valid until `exp`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Sign a token for the given user. Expiry derives from the configured
    /// TTL; the payload carries no secret material.
    #[track_caller]
    pub fn create_token(&self, user: &User) -> AuthErrorResult<String> {
        let claims = Claims::for_user(user, self.ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::Signing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Validate a token and return its claims.
    ///
    /// Every failure collapses into the same `InvalidToken` so callers
    /// cannot distinguish expired from forged; the detail is logged.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                log::debug!("Token rejected: {}", e);
                AuthError::InvalidToken {
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        // Additional claim validation
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
