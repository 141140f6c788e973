mod common;

use axum_test::TestServer;
use brewtrack::domain::entities::TokenScope;
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_token_shows_credential_once(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let user_id = common::create_test_user(&pool, "brewer@example.com", "pw").await;
    let credential = common::issue_wire_token(&state, user_id, TokenScope::All).await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/v1/tokens")
        .authorization_bearer(&credential)
        .json(&serde_json::json!({ "scope": "WRITE_TEMPERATURES" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["scope"], "WRITE_TEMPERATURES");
    assert_eq!(json["kind"], "PERSONAL_ACCESS");
    assert!(json["wireToken"].as_str().unwrap().contains(':'));

    // Listing afterwards exposes metadata only
    let list = server
        .get("/api/v1/tokens")
        .authorization_bearer(&credential)
        .await;
    list.assert_status_ok();
    let tokens = list.json::<serde_json::Value>();
    for t in tokens.as_array().unwrap() {
        assert!(t.get("wireToken").is_none());
        assert!(t.get("secretHash").is_none());
    }
}

#[sqlx::test]
async fn test_narrow_scope_cannot_manage_tokens(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let user_id = common::create_test_user(&pool, "brewer@example.com", "pw").await;
    let narrow = common::issue_wire_token(&state, user_id, TokenScope::WriteTemperatures).await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let create = server
        .post("/api/v1/tokens")
        .authorization_bearer(&narrow)
        .json(&serde_json::json!({ "scope": "READ_ALL" }))
        .await;
    create.assert_status_forbidden();

    let list = server
        .get("/api/v1/tokens")
        .authorization_bearer(&narrow)
        .await;
    list.assert_status_forbidden();
}

#[sqlx::test]
async fn test_revoked_token_stops_authenticating(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let user_id = common::create_test_user(&pool, "brewer@example.com", "pw").await;
    let admin = common::issue_wire_token(&state, user_id, TokenScope::All).await;
    let victim = common::issue_wire_token(&state, user_id, TokenScope::All).await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let victim_id = victim.split(':').next().unwrap().to_string();

    let revoke = server
        .delete(&format!("/api/v1/tokens/{victim_id}"))
        .authorization_bearer(&admin)
        .await;
    revoke.assert_status(axum::http::StatusCode::NO_CONTENT);

    // The revoked credential is now rejected uniformly
    let attempt = server
        .get("/api/v1/tokens")
        .authorization_bearer(&victim)
        .await;
    attempt.assert_status_unauthorized();

    // The other credential still works
    let still_fine = server
        .get("/api/v1/tokens")
        .authorization_bearer(&admin)
        .await;
    still_fine.assert_status_ok();
}

#[sqlx::test]
async fn test_missing_and_garbage_credentials(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let missing = server.get("/api/v1/tokens").await;
    missing.assert_status_unauthorized();

    let garbage = server
        .get("/api/v1/tokens")
        .authorization_bearer("no-colon-here")
        .await;
    garbage.assert_status_unauthorized();

    let fake = server
        .get("/api/v1/tokens")
        .authorization_bearer("4b4ef407-914a-42f9-8fd8-3a2a433cbbbf:fakesecret")
        .await;
    fake.assert_status_unauthorized();
}
