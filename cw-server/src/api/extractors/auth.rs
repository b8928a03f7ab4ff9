//! Axum extractors for bearer-token authentication and authorization
//!
//! `AuthClaims` is the authentication gate; `AdminClaims` composes the
//! privilege check on top of it, so authorization can never run against an
//! unverified request.

use crate::{ApiError, AppState};

use cw_auth::{AuthError, Claims, policy};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts and verifies the bearer token, attaching its claims.
///
/// No token yields 401; so does any verification failure.
pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(parts)?;
            let claims = state.token_service.verify(token)?;

            Ok(AuthClaims(claims))
        }
    }
}

/// Authentication plus the admin privilege check.
pub struct AdminClaims(pub Claims);

impl FromRequestParts<AppState> for AdminClaims {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let AuthClaims(claims) = AuthClaims::from_request_parts(parts, state).await?;
            policy::require_admin(&claims)?;

            Ok(AdminClaims(claims))
        }
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let value = header.to_str().map_err(|_| AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    })?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })
}
