//! API Integration Tests
//!
//! Run against the in-memory store by default. The PostgreSQL flow runs only
//! when DATABASE_URL is set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn submit(server: &TestServer, text: &str) -> TermBody {
    let response = server
        .post_from("/api/terms", &unique_origin(), &SubmitTermRequest::new(text))
        .await
        .unwrap();
    assert_json::<ItemBody>(response, StatusCode::CREATED)
        .await
        .unwrap()
        .item
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
async fn test_submit_term() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_from(
            "/api/terms",
            &unique_origin(),
            &SubmitTermRequest::named("  texts back within a minute  ", "  sam "),
        )
        .await
        .unwrap();
    let body: ItemBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.item.text, "texts back within a minute");
    assert_eq!(body.item.name, "sam");
    assert_eq!(
        (body.item.green_flags, body.item.red_flags, body.item.likes),
        (0, 0, 0)
    );
    assert!(body.item.id.parse::<i64>().unwrap() > 0);
    assert!(!body.item.created_at.is_empty());

    let response = server
        .get(&format!("/api/terms/{}", body.item.id))
        .await
        .unwrap();
    let fetched: ItemBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.item.id, body.item.id);
}

#[tokio::test]
async fn test_submit_rate_limited() {
    let server = TestServer::start().await.expect("Failed to start server");
    let origin = unique_origin();

    let response = server
        .post_from("/api/terms", &origin, &SubmitTermRequest::new("hello there"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_from("/api/terms", &origin, &SubmitTermRequest::new("hello again"))
        .await
        .unwrap();
    assert_eq!(response.headers()["retry-after"], "10");
    let body: ErrorBody = assert_json(response, StatusCode::TOO_MANY_REQUESTS)
        .await
        .unwrap();
    assert_eq!(body.error.code, "RATE_LIMITED");
    assert!(!body.error.message.contains(&origin));

    // Another origin is unaffected
    let response = server
        .post_from("/api/terms", &unique_origin(), &SubmitTermRequest::new("hello again"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_submit_validation() {
    let server = TestServer::start().await.expect("Failed to start server");

    for text in ["abcd".to_string(), "x".repeat(301)] {
        let response = server
            .post_from("/api/terms", &unique_origin(), &SubmitTermRequest::new(&text))
            .await
            .unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.error.code, "VALIDATION_ERROR");
    }

    let response = server
        .post_from(
            "/api/terms",
            &unique_origin(),
            &SubmitTermRequest::named("hello there", &"n".repeat(41)),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.post_raw("/api/terms", "not json").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_BODY");
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_orders() {
    let server = TestServer::start().await.expect("Failed to start server");
    let a = submit(&server, "first term").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let b = submit(&server, "second term").await;

    let response = server.get("/api/terms").await.unwrap();
    let recent: ItemsBody = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<_> = recent.items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![b.id.as_str(), a.id.as_str()]);

    for _ in 0..2 {
        let response = server
            .post_from(
                &format!("/api/terms/{}/flag", a.id),
                &unique_origin(),
                &FlagTransition {
                    prev: None,
                    next: Some("green"),
                },
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get("/api/terms?sort=green").await.unwrap();
    let green: ItemsBody = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<_> = green.items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![a.id.as_str(), b.id.as_str()]);

    let response = server.get("/api/terms?sort=bogus").await.unwrap();
    let fallback: ItemsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fallback.items[0].id, b.id);
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_flag_transitions() {
    let server = TestServer::start().await.expect("Failed to start server");
    let term = submit(&server, "hello there").await;
    let path = format!("/api/terms/{}/flag", term.id);

    let steps = [
        (None, Some("green"), (1, 0)),
        (Some("green"), Some("red"), (0, 1)),
        (Some("red"), Some("red"), (0, 1)),
        (Some("red"), None, (0, 0)),
        (Some("red"), None, (0, 0)),
    ];

    for (prev, next, expected) in steps {
        let response = server
            .post_from(&path, &unique_origin(), &FlagTransition { prev, next })
            .await
            .unwrap();
        let body: ItemBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!((body.item.green_flags, body.item.red_flags), expected);
    }

    let response = server.post_raw(&path, "{\"prev\":").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_BODY");
}

#[tokio::test]
async fn test_like_and_unlike() {
    let server = TestServer::start().await.expect("Failed to start server");
    let term = submit(&server, "hello there").await;
    let path = format!("/api/terms/{}/like", term.id);

    let response = server.post_raw(&path, "").await.unwrap();
    let body: ItemBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.item.likes, 1);

    let response = server
        .post_from(&path, &unique_origin(), &LikeToggle { unlike: false })
        .await
        .unwrap();
    let body: ItemBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.item.likes, 2);

    let response = server
        .post_from(&path, &unique_origin(), &LikeToggle { unlike: true })
        .await
        .unwrap();
    let body: ItemBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.item.likes, 1);
}

#[tokio::test]
async fn test_concurrent_likes() {
    let server = TestServer::start().await.expect("Failed to start server");
    let term = submit(&server, "hello there").await;
    let path = format!("/api/terms/{}/like", term.id);

    let requests = (0..20).map(|_| server.post_raw(&path, ""));
    for response in join_all(requests).await {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    let response = server.get(&format!("/api/terms/{}", term.id)).await.unwrap();
    let body: ItemBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.item.likes, 20);
}

#[tokio::test]
async fn test_unknown_term() {
    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/api/terms/999999", "/api/terms/abc"] {
        let response = server.get(path).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(body.error.code, "UNKNOWN_TERM");
    }

    let response = server.post_raw("/api/terms/999999/like", "").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_from(
            "/api/terms/-4/flag",
            &unique_origin(),
            &FlagTransition {
                prev: None,
                next: Some("red"),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// PostgreSQL
// ============================================================================

#[tokio::test]
async fn test_postgres_flow() {
    let Some(server) = TestServer::start_postgres()
        .await
        .expect("Failed to start server")
    else {
        return;
    };

    let pid = std::process::id();
    let origin = format!("172.16.{}.{}", (pid >> 8) & 0xff, pid & 0xff);

    let response = server
        .post_from("/api/terms", &origin, &SubmitTermRequest::new("kept in postgres"))
        .await
        .unwrap();
    let term: ItemBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_raw(&format!("/api/terms/{}/like", term.item.id), "")
        .await
        .unwrap();
    let liked: ItemBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(liked.item.likes, 1);

    let response = server.get("/api/terms?sort=liked").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
