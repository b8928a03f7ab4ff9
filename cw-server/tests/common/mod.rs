#![allow(dead_code)]

//! Test infrastructure for cw-server API tests

use cw_auth::{CredentialHasher, TokenService};
use cw_core::User;
use cw_db::UserRepository;
use cw_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite.
///
/// One connection keeps every request on the same in-memory database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/cw-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing (hash cost 1 keeps tests fast)
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        token_service: Arc::new(TokenService::with_hs256(
            TEST_SECRET,
            Duration::from_secs(3600),
        )),
        credential_hasher: CredentialHasher::new(1, 2).expect("valid hash cost"),
    }
}

/// Insert a user row directly and return it
pub async fn create_test_user(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
    is_admin: bool,
) -> User {
    let password_hash = state
        .credential_hasher
        .hash(password)
        .await
        .expect("Failed to hash test password");

    let mut user = User::new(name.to_string(), email.to_string(), password_hash);
    user.is_admin = is_admin;

    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    user
}

/// Mint a bearer token for a user
pub fn token_for(state: &AppState, user: &User) -> String {
    state
        .token_service
        .create_token(user)
        .expect("Failed to create test token")
}

/// Shorthand: an admin user plus a token for it
pub async fn admin_with_token(state: &AppState) -> (User, String) {
    let admin = create_test_user(state, "Root", "root@test.local", "rootpass", true).await;
    let token = token_for(state, &admin);

    (admin, token)
}
