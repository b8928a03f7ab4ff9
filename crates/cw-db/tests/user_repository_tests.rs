//! Integration tests for the user repository

use cw_core::User;
use cw_db::{DbError, UserRepository};

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn test_user(name: &str, email: &str) -> User {
    User::new(
        name.to_string(),
        email.to_string(),
        "$argon2id$placeholder".to_string(),
    )
}

#[tokio::test]
async fn test_create_and_find_by_email() {
    let repo = UserRepository::new(create_test_pool().await);
    let user = test_user("Ana", "ana@example.com");

    repo.create(&user).await.unwrap();

    let found = repo.find_by_email("ana@example.com").await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.name, "Ana");
    assert_eq!(found.email, "ana@example.com");
    assert_eq!(found.password_hash, user.password_hash);
    assert!(!found.is_admin);
    // timestamps survive at second resolution
    assert_eq!(found.created_at.timestamp(), user.created_at.timestamp());

    let by_id = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "ana@example.com");
}

#[tokio::test]
async fn test_find_by_email_missing_returns_none() {
    let repo = UserRepository::new(create_test_pool().await);

    let found = repo.find_by_email("nobody@example.com").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_unique_violation() {
    let repo = UserRepository::new(create_test_pool().await);
    repo.create(&test_user("Ana", "ana@example.com")).await.unwrap();

    let result = repo.create(&test_user("Other Ana", "ana@example.com")).await;

    assert!(matches!(result, Err(DbError::UniqueViolation { .. })));
}

#[tokio::test]
async fn test_duplicate_document_number_is_unique_violation() {
    let repo = UserRepository::new(create_test_pool().await);

    let mut first = test_user("Ana", "ana@example.com");
    first.document_number = Some("123.456.789-00".to_string());
    repo.create(&first).await.unwrap();

    let mut second = test_user("Bia", "bia@example.com");
    second.document_number = Some("123.456.789-00".to_string());
    let result = repo.create(&second).await;

    assert!(matches!(result, Err(DbError::UniqueViolation { .. })));
}

#[tokio::test]
async fn test_absent_document_numbers_do_not_collide() {
    let repo = UserRepository::new(create_test_pool().await);

    repo.create(&test_user("Ana", "ana@example.com")).await.unwrap();
    repo.create(&test_user("Bia", "bia@example.com")).await.unwrap();

    let all = repo.find_all(None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_update_persists_fields_and_timestamp() {
    let repo = UserRepository::new(create_test_pool().await);
    let mut user = test_user("Ana", "ana@example.com");
    repo.create(&user).await.unwrap();

    user.name = "Ana Maria".to_string();
    user.updated_at += chrono::Duration::seconds(10);
    repo.update(&user).await.unwrap();

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Ana Maria");
    assert_eq!(found.updated_at.timestamp(), user.updated_at.timestamp());
    assert!(found.updated_at > found.created_at);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let repo = UserRepository::new(create_test_pool().await);
    let user = test_user("Ana", "ana@example.com");
    repo.create(&user).await.unwrap();

    repo.delete(user.id).await.unwrap();

    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_filters_by_name_or_email() {
    let repo = UserRepository::new(create_test_pool().await);
    repo.create(&test_user("Ana", "ana@example.com")).await.unwrap();
    repo.create(&test_user("Bia", "bia@other.org")).await.unwrap();

    let by_name = repo.find_all(Some("Ana")).await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Ana");

    let by_email = repo.find_all(Some("other.org")).await.unwrap();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Bia");

    let none = repo.find_all(Some("zzz")).await.unwrap();
    assert!(none.is_empty());
}
