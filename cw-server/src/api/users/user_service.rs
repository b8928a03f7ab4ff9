//! User lifecycle business logic
//!
//! Owns the uniqueness and privilege rules: email conflicts, the admin
//! delete guard, and the no-hash-in-responses invariant. Handlers stay
//! thin; everything with a rule lives here.

use crate::{
    ApiError, ApiResult, AuthResponse, LoginRequest, SignupRequest, UpdateUserRequest, UserDto,
};

use cw_auth::{Claims, CredentialHasher, TokenService, policy};
use cw_core::User;
use cw_db::UserRepository;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use uuid::Uuid;

const MIN_PASSWORD_LENGTH: usize = 6;

pub struct UserService {
    repo: UserRepository,
    token_service: Arc<TokenService>,
    credential_hasher: CredentialHasher,
}

impl UserService {
    pub fn new(
        repo: UserRepository,
        token_service: Arc<TokenService>,
        credential_hasher: CredentialHasher,
    ) -> Self {
        Self {
            repo,
            token_service,
            credential_hasher,
        }
    }

    /// Register a new account and issue its first token.
    pub async fn signup(&self, input: SignupRequest) -> ApiResult<AuthResponse> {
        let name = require_field(input.name, "name")?;
        let email = require_field(input.email, "email")?;
        let password = require_field(input.password, "password")?;
        validate_email(&email)?;
        validate_password(&password)?;

        // Advisory pre-check; the store's UNIQUE index is the final arbiter
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ApiError::Conflict {
                message: "email already registered".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let password_hash = self.credential_hasher.hash(&password).await?;

        let mut user = User::new(name, email, password_hash);
        user.phone = input.phone;
        user.document_type = input.document_type;
        user.document_number = input.document_number;
        user.is_admin = input.is_admin;

        // A concurrent signup can slip past the pre-check; the constraint
        // violation converges on the same conflict response
        self.repo.create(&user).await?;

        log::info!("User created: {}", user.id);

        let token = self.token_service.create_token(&user)?;

        Ok(AuthResponse {
            message: "user created".to_string(),
            token,
        })
    }

    /// Authenticate by email and password.
    pub async fn login(&self, input: LoginRequest) -> ApiResult<AuthResponse> {
        let email = require_field(input.email, "email")?;
        let password = require_field(input.password, "password")?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                message: "email not registered".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let password_valid = self
            .credential_hasher
            .verify(&password, &user.password_hash)
            .await?;

        if !password_valid {
            return Err(ApiError::BadRequest {
                message: "invalid credentials".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token = self.token_service.create_token(&user)?;

        Ok(AuthResponse {
            message: "login successful".to_string(),
            token,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> ApiResult<UserDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApiError::NotFound {
                message: format!("User {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// List users; requires admin claims. Projections never carry the hash.
    pub async fn get_all(&self, query: Option<&str>, claims: &Claims) -> ApiResult<Vec<UserDto>> {
        policy::require_admin(claims)?;

        let users = self.repo.find_all(query).await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Apply a partial update; a supplied password is re-hashed and
    /// `updated_at` always advances.
    pub async fn update(&self, id: Uuid, input: UpdateUserRequest) -> ApiResult<UserDto> {
        if input.is_empty() {
            return Err(ApiError::Validation {
                message: "no fields to update".to_string(),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                message: format!("User {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if let Some(name) = input.name {
            validate_name(&name)?;
            user.name = name;
        }
        if let Some(email) = input.email {
            validate_email(&email)?;
            user.email = email;
        }
        if let Some(password) = input.password {
            validate_password(&password)?;
            user.password_hash = self.credential_hasher.hash(&password).await?;
        }
        if let Some(phone) = input.phone {
            user.phone = Some(phone);
        }
        if let Some(document_type) = input.document_type {
            user.document_type = Some(document_type);
        }
        if let Some(document_number) = input.document_number {
            user.document_number = Some(document_number);
        }
        if let Some(is_admin) = input.is_admin {
            user.is_admin = is_admin;
        }

        user.touch();
        self.repo.update(&user).await?;

        Ok(UserDto::from(user))
    }

    /// Delete a user. Admin accounts are protected by an explicit business
    /// rule, not a storage constraint.
    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                message: format!("User {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if user.is_admin {
            return Err(ApiError::Forbidden {
                message: "cannot delete an admin account".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.repo.delete(id).await?;

        log::info!("User deleted: {}", id);

        Ok(())
    }
}

/// Presence check for required body fields; absent or blank is a
/// field-level validation error.
#[track_caller]
fn require_field(value: Option<String>, field: &str) -> ApiResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::Validation {
            message: format!("{} is required", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
fn validate_name(name: &str) -> ApiResult<()> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "name must not be empty".to_string(),
            field: Some("name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

#[track_caller]
fn validate_email(email: &str) -> ApiResult<()> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(ApiError::Validation {
            message: "a valid email is required".to_string(),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

#[track_caller]
fn validate_password(password: &str) -> ApiResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::Validation {
            message: format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ),
            field: Some("password".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
