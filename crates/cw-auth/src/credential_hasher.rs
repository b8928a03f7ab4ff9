use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher, PasswordVerifier, Version};
use error_location::ErrorLocation;
use tokio::sync::Semaphore;

/// Argon2id credential hasher with a fixed work factor.
///
/// The configurable cost factor is the iteration count; memory and lane
/// count are pinned to server defaults. Hashing is CPU-bound, so both
/// operations run on the blocking thread pool behind a semaphore bounding
/// how many hashes are in flight at once - a slow hash blocks only the
/// request that issued it.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
    permits: Arc<Semaphore>,
}

impl CredentialHasher {
    const MEMORY_KIB: u32 = 19 * 1024; // 19 MiB
    const PARALLELISM: u32 = 1;
    const OUTPUT_LEN: usize = 32;

    /// Build a hasher for the given cost factor.
    ///
    /// The cost must be a positive integer; rejecting it here lets startup
    /// fail before the first request ever needs a hash.
    #[track_caller]
    pub fn new(cost: u32, max_concurrent: usize) -> AuthErrorResult<Self> {
        if cost == 0 {
            return Err(AuthError::InvalidCost {
                cost,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let params = Params::new(
            Self::MEMORY_KIB,
            cost,
            Self::PARALLELISM,
            Some(Self::OUTPUT_LEN),
        )
        .map_err(|e| AuthError::Hashing {
            message: format!("Invalid Argon2 parameters: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        })
    }

    /// Hash a plaintext credential with a fresh random salt.
    ///
    /// Two calls with the same input produce different PHC strings.
    pub async fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let argon2 = self.argon2.clone();
        let plaintext = plaintext.to_owned();

        self.run_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AuthError::Hashing {
                    message: format!("Password hashing failed: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })
        })
        .await
    }

    /// Check a plaintext credential against a stored PHC string.
    ///
    /// A mismatch is `Ok(false)`. A stored hash that cannot be parsed is a
    /// `Hashing` error, not a mismatch, so corrupt records stay detectable.
    pub async fn verify(&self, plaintext: &str, stored: &str) -> AuthErrorResult<bool> {
        let argon2 = self.argon2.clone();
        let plaintext = plaintext.to_owned();
        let stored = stored.to_owned();

        self.run_blocking(move || {
            let parsed = PasswordHash::new(&stored).map_err(|e| AuthError::Hashing {
                message: format!("Stored credential hash is malformed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            match argon2.verify_password(plaintext.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(AuthError::Hashing {
                    message: format!("Password verification failed: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        })
        .await
    }

    async fn run_blocking<T>(
        &self,
        f: impl FnOnce() -> AuthErrorResult<T> + Send + 'static,
    ) -> AuthErrorResult<T>
    where
        T: Send + 'static,
    {
        let _permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| AuthError::Hashing {
                message: "Hashing pool is closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        tokio::task::spawn_blocking(f)
            .await
            .map_err(|e| AuthError::Hashing {
                message: format!("Hashing task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
    }
}
