mod common;

use axum_test::TestServer;
use brewtrack::domain::entities::TokenScope;
use sqlx::PgPool;

#[sqlx::test]
async fn test_list_batches_paginates(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let user_id = common::create_test_user(&pool, "brewer@example.com", "pw").await;
    let credential = common::issue_wire_token(&state, user_id, TokenScope::ReadAll).await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    for i in 0..5 {
        common::create_test_batch(&pool, user_id, &format!("Batch {i}")).await;
    }

    let response = server
        .get("/api/v1/batches")
        .add_query_param("first", "2")
        .authorization_bearer(&credential)
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 2);
    assert_eq!(json["pageInfo"]["hasNextPage"], true);
    assert_eq!(json["pageInfo"]["hasPreviousPage"], false);
}

#[sqlx::test]
async fn test_cursor_resumes_without_gaps_or_repeats(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let user_id = common::create_test_user(&pool, "brewer@example.com", "pw").await;
    let credential = common::issue_wire_token(&state, user_id, TokenScope::ReadAll).await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    for i in 0..5 {
        common::create_test_batch(&pool, user_id, &format!("Batch {i}")).await;
    }

    let mut seen = Vec::new();
    let mut after: Option<String> = None;

    loop {
        let mut request = server
            .get("/api/v1/batches")
            .add_query_param("first", "2")
            .authorization_bearer(&credential);
        if let Some(cursor) = &after {
            request = request.add_query_param("after", cursor);
        }
        let response = request.await;
        response.assert_status_ok();
        let json = response.json::<serde_json::Value>();

        let edges = json["edges"].as_array().unwrap().clone();
        for edge in &edges {
            seen.push(edge["node"]["name"].as_str().unwrap().to_string());
        }

        if json["pageInfo"]["hasNextPage"] == false {
            break;
        }
        after = Some(edges.last().unwrap()["cursor"].as_str().unwrap().to_string());
    }

    let expected: Vec<String> = (0..5).map(|i| format!("Batch {i}")).collect();
    assert_eq!(seen, expected);
}

#[sqlx::test]
async fn test_invalid_cursor_is_rejected_not_reset(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let user_id = common::create_test_user(&pool, "brewer@example.com", "pw").await;
    let credential = common::issue_wire_token(&state, user_id, TokenScope::ReadAll).await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    common::create_test_batch(&pool, user_id, "Batch 0").await;

    let response = server
        .get("/api/v1/batches")
        .add_query_param("after", "!!!not-base64!!!")
        .authorization_bearer(&credential)
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_get_batch_is_owner_scoped(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let owner_id = common::create_test_user(&pool, "owner@example.com", "pw").await;
    let other_id = common::create_test_user(&pool, "other@example.com", "pw").await;
    let other_cred = common::issue_wire_token(&state, other_id, TokenScope::ReadAll).await;
    let owner_cred = common::issue_wire_token(&state, owner_id, TokenScope::ReadAll).await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let uuid = common::create_test_batch(&pool, owner_id, "Secret IPA").await;

    let ok = server
        .get(&format!("/api/v1/batches/{uuid}"))
        .authorization_bearer(&owner_cred)
        .await;
    ok.assert_status_ok();
    assert_eq!(ok.json::<serde_json::Value>()["name"], "Secret IPA");

    let denied = server
        .get(&format!("/api/v1/batches/{uuid}"))
        .authorization_bearer(&other_cred)
        .await;
    denied.assert_status_not_found();
}

#[sqlx::test]
async fn test_temperature_scope_cannot_read_batches(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let user_id = common::create_test_user(&pool, "brewer@example.com", "pw").await;
    let narrow = common::issue_wire_token(&state, user_id, TokenScope::ReadTemperatures).await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .get("/api/v1/batches")
        .authorization_bearer(&narrow)
        .await;

    response.assert_status_forbidden();
}
