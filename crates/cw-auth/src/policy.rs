//! Privilege gates applied to already-verified claims.
//!
//! These run strictly after token verification - an unauthenticated request
//! never reaches them. Pure functions of the claims, no per-request state.

use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Passes only when the claims carry the admin flag.
#[track_caller]
pub fn require_admin(claims: &Claims) -> AuthErrorResult<()> {
    if claims.is_admin {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            message: "admin privileges required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Passes when the claims carry the admin flag or any of the given roles.
#[track_caller]
pub fn require_any_role(claims: &Claims, roles: &[&str]) -> AuthErrorResult<()> {
    if claims.is_admin || claims.roles.iter().any(|r| roles.contains(&r.as_str())) {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            message: "insufficient role".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
