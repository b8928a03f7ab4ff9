use cw_auth::{CredentialHasher, TokenService};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state injected into every handler.
///
/// Everything here is built once at startup; per-request code only reads.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_service: Arc<TokenService>,
    pub credential_hasher: CredentialHasher,
}
