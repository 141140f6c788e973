mod common;

use axum_test::TestServer;
use brewtrack::domain::entities::TokenScope;
use sqlx::PgPool;

#[sqlx::test]
async fn test_list_sensors(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let user_id = common::create_test_user(&pool, "brewer@example.com", "pw").await;
    let credential = common::issue_wire_token(&state, user_id, TokenScope::ReadAll).await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    common::create_test_sensor(&pool, user_id, "fermenter probe").await;
    common::create_test_sensor(&pool, user_id, "keezer probe").await;

    let response = server
        .get("/api/v1/sensors")
        .authorization_bearer(&credential)
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 2);
    assert_eq!(json["pageInfo"]["hasNextPage"], false);
}

#[sqlx::test]
async fn test_get_sensor_by_uuid(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let user_id = common::create_test_user(&pool, "brewer@example.com", "pw").await;
    let credential = common::issue_wire_token(&state, user_id, TokenScope::ReadAll).await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let uuid = common::create_test_sensor(&pool, user_id, "fermenter probe").await;

    let response = server
        .get(&format!("/api/v1/sensors/{uuid}"))
        .authorization_bearer(&credential)
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["name"], "fermenter probe");
    assert_eq!(json["id"], uuid.to_string());
    // Internal row ids never leak
    assert!(json.get("userId").is_none());
}

#[sqlx::test]
async fn test_unknown_sensor_is_not_found(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let user_id = common::create_test_user(&pool, "brewer@example.com", "pw").await;
    let credential = common::issue_wire_token(&state, user_id, TokenScope::ReadAll).await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .get(&format!("/api/v1/sensors/{}", uuid::Uuid::new_v4()))
        .authorization_bearer(&credential)
        .await;

    response.assert_status_not_found();
}
