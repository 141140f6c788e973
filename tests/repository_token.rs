mod common;

use brewtrack::domain::entities::{NewAuthToken, TokenKind, TokenScope};
use brewtrack::domain::repositories::TokenRepository;
use brewtrack::error::AppError;
use brewtrack::infrastructure::persistence::PgTokenRepository;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

fn new_token(user_id: i64, hash: &str) -> NewAuthToken {
    NewAuthToken {
        secret_hash: hash.to_string(),
        user_id,
        scope: TokenScope::All,
        kind: TokenKind::PersonalAccess,
        expires_at: None,
    }
}

#[sqlx::test]
async fn test_insert_and_find(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "t@example.com", "pw").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    let created = repo.insert(new_token(user_id, "digest-1")).await.unwrap();
    assert_eq!(created.secret_hash, "digest-1");
    assert_eq!(created.user_id, user_id);
    assert!(created.expires_at.is_none());

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.scope, TokenScope::All);
    assert_eq!(found.kind, TokenKind::PersonalAccess);
}

#[sqlx::test]
async fn test_find_unknown_id_is_none(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn test_expired_token_is_still_returned(pool: PgPool) {
    // Expiry is an authentication decision, not a storage one.
    let user_id = common::create_test_user(&pool, "t@example.com", "pw").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    let mut token = new_token(user_id, "digest-expired");
    token.expires_at = Some(Utc::now() - chrono::Duration::hours(1));
    let created = repo.insert(token).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert!(found.is_expired(Utc::now()));
}

#[sqlx::test]
async fn test_list_for_user(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "t@example.com", "pw").await;
    let other_id = common::create_test_user(&pool, "other@example.com", "pw").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.insert(new_token(user_id, "a")).await.unwrap();
    repo.insert(new_token(user_id, "b")).await.unwrap();
    repo.insert(new_token(other_id, "c")).await.unwrap();

    let tokens = repo.list_for_user(user_id).await.unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.user_id == user_id));
}

#[sqlx::test]
async fn test_revoke_sets_expiry(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "t@example.com", "pw").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    let created = repo.insert(new_token(user_id, "revoke-me")).await.unwrap();
    repo.revoke(created.id, user_id).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert!(found.expires_at.is_some());
    assert!(found.is_expired(Utc::now() + chrono::Duration::seconds(1)));
}

#[sqlx::test]
async fn test_revoke_foreign_token_is_not_found(pool: PgPool) {
    let owner_id = common::create_test_user(&pool, "owner@example.com", "pw").await;
    let thief_id = common::create_test_user(&pool, "thief@example.com", "pw").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    let created = repo.insert(new_token(owner_id, "mine")).await.unwrap();

    let err = repo.revoke(created.id, thief_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));

    // Owner's token must be untouched
    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert!(found.expires_at.is_none());
}
