use crate::{AuthError, CredentialHasher};

fn fast_hasher() -> CredentialHasher {
    // cost 1 keeps tests quick; production cost comes from config
    CredentialHasher::new(1, 2).unwrap()
}

#[tokio::test]
async fn given_matching_password_when_verified_then_true() {
    let hasher = fast_hasher();

    let hash = hasher.hash("secret1").await.unwrap();
    let ok = hasher.verify("secret1", &hash).await.unwrap();

    assert!(ok);
}

#[tokio::test]
async fn given_wrong_password_when_verified_then_false() {
    let hasher = fast_hasher();

    let hash = hasher.hash("secret1").await.unwrap();
    let ok = hasher.verify("secret2", &hash).await.unwrap();

    assert!(!ok);
}

#[tokio::test]
async fn given_same_password_when_hashed_twice_then_outputs_differ() {
    let hasher = fast_hasher();

    let first = hasher.hash("secret1").await.unwrap();
    let second = hasher.hash("secret1").await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn given_malformed_stored_hash_when_verified_then_error_not_mismatch() {
    let hasher = fast_hasher();

    let result = hasher.verify("secret1", "not-a-phc-string").await;

    assert!(matches!(result, Err(AuthError::Hashing { .. })));
}

#[test]
fn given_zero_cost_when_constructed_then_rejected() {
    let result = CredentialHasher::new(0, 2);

    assert!(matches!(result, Err(AuthError::InvalidCost { cost: 0, .. })));
}
