//! API Integration Tests
//!
//! Every test runs against an in-memory store unless its name says
//! `postgres`. Those tests need:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use thoughts_core::ThoughtId;

// ============================================================================
// Root Tests
// ============================================================================

#[tokio::test]
async fn test_root_lists_endpoints() {
    let server = TestServer::start_in_memory().await.expect("Failed to start server");

    let response = server.get("/").await.unwrap();
    let index: IndexResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        index.message,
        "Welcome to the Happy Thoughts API! Below are the available endpoints"
    );

    let thoughts = index
        .endpoints
        .iter()
        .find(|e| e.path == "/thoughts")
        .expect("missing /thoughts");
    assert_eq!(thoughts.methods, ["GET", "POST"]);

    let like = index
        .endpoints
        .iter()
        .find(|e| e.path == "/thoughts/:id/like")
        .expect("missing like endpoint");
    assert_eq!(like.methods, ["POST"]);
}

// ============================================================================
// Thought Tests
// ============================================================================

#[tokio::test]
async fn test_create_like_and_list() {
    let server = TestServer::start_in_memory().await.expect("Failed to start server");

    let response = server
        .post("/thoughts", &CreateThoughtRequest::new("Hello world"))
        .await
        .unwrap();
    let created: ThoughtResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.message, "Hello world");
    assert_eq!(created.hearts, 0);
    assert!(created.created_at <= chrono::Utc::now());

    let response = server
        .post_empty(&format!("/thoughts/{}/like", created.id))
        .await
        .unwrap();
    let liked: ThoughtResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(liked.id, created.id);
    assert_eq!(liked.hearts, 1);

    let response = server.get("/thoughts").await.unwrap();
    let listed: Vec<ThoughtResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].hearts, 1);
}

#[tokio::test]
async fn test_create_thought_too_short() {
    let server = TestServer::start_in_memory().await.expect("Failed to start server");

    let response = server
        .post("/thoughts", &CreateThoughtRequest::new("hi"))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(!error.error.is_empty());

    let response = server.get("/thoughts").await.unwrap();
    let listed: Vec<ThoughtResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_create_thought_length_bounds() {
    let server = TestServer::start_in_memory().await.expect("Failed to start server");

    for (message, expected) in [
        ("a".repeat(4), StatusCode::BAD_REQUEST),
        ("a".repeat(5), StatusCode::CREATED),
        ("a".repeat(140), StatusCode::CREATED),
        ("a".repeat(141), StatusCode::BAD_REQUEST),
    ] {
        let response = server
            .post("/thoughts", &CreateThoughtRequest::new(message))
            .await
            .unwrap();
        assert_status(response, expected).await.unwrap();
    }
}

#[tokio::test]
async fn test_create_thought_missing_message() {
    let server = TestServer::start_in_memory().await.expect("Failed to start server");

    let response = server
        .post("/thoughts", &serde_json::json!({}))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(!error.error.is_empty());
}

#[tokio::test]
async fn test_list_thoughts_capped_newest_first() {
    let server = TestServer::start_in_memory().await.expect("Failed to start server");

    for _ in 0..23 {
        let response = server
            .post("/thoughts", &CreateThoughtRequest::unique())
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }
    let newest: ThoughtResponse = assert_json(
        server
            .post("/thoughts", &CreateThoughtRequest::new("The very latest thought"))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let response = server.get("/thoughts").await.unwrap();
    let listed: Vec<ThoughtResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listed.len(), 20);
    assert_eq!(listed[0].id, newest.id);
    assert!(listed
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

#[tokio::test]
async fn test_like_unknown_thought() {
    let server = TestServer::start_in_memory().await.expect("Failed to start server");

    let response = server
        .post_empty(&format!("/thoughts/{}/like", ThoughtId::generate()))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error, "Thought not found");

    let response = server.get("/thoughts").await.unwrap();
    let listed: Vec<ThoughtResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_like_malformed_id() {
    let server = TestServer::start_in_memory().await.expect("Failed to start server");

    let response = server.post_empty("/thoughts/12345/like").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_likes() {
    let server = TestServer::start_in_memory().await.expect("Failed to start server");

    let response = server
        .post("/thoughts", &CreateThoughtRequest::unique())
        .await
        .unwrap();
    let created: ThoughtResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let url = format!("{}/thoughts/{}/like", server.base_url(), created.id);
    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..30 {
        let client = server.client.clone();
        let url = url.clone();
        tasks.spawn(async move { client.post(&url).send().await });
    }
    while let Some(result) = tasks.join_next().await {
        let response = result.unwrap().unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = server.get("/thoughts").await.unwrap();
    let listed: Vec<ThoughtResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed[0].hearts, 30);
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start_in_memory().await.expect("Failed to start server");

    let response = server.get("/thoughts").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_create_and_like() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateThoughtRequest::unique();

    let response = server.post("/thoughts", &request).await.unwrap();
    let created: ThoughtResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.message, request.message);

    for expected in 1..=3 {
        let response = server
            .post_empty(&format!("/thoughts/{}/like", created.id))
            .await
            .unwrap();
        let liked: ThoughtResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(liked.hearts, expected);
    }

    let response = server.get("/thoughts").await.unwrap();
    let listed: Vec<ThoughtResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.len() <= 20);
    assert!(listed
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

#[tokio::test]
async fn test_postgres_like_unknown_thought() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_empty(&format!("/thoughts/{}/like", ThoughtId::generate()))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error, "Thought not found");
}
