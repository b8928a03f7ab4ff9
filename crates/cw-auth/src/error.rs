use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Uniform rejection for any token failure (bad signature, expired,
    /// malformed). The sub-reason is logged, never surfaced.
    #[error("Invalid or expired token {location}")]
    InvalidToken { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Access denied: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signing failed: {message} {location}")]
    Signing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid hash cost factor: {cost} {location}")]
    InvalidCost { cost: u32, location: ErrorLocation },

    #[error("Hashing error: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
