use serde::Serialize;

/// Body returned by signup and login - the only operations that mint tokens.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
}
