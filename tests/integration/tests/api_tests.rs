//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

async fn create_posts(server: &TestServer, count: usize) {
    for i in 1..=count {
        let request = CreatePostRequest::text(&format!("Post {i}"), &format!("Body {i}"));
        let response = server.post("/posts", &request).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_welcome() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.unwrap();
    let welcome: WelcomeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(welcome.message, "Welcome to my Application");
    server.cleanup().await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_text_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/posts", &CreatePostRequest::text("Hello", "World"))
        .await
        .unwrap();
    let created: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/posts/{}", created.public_id))
        .await
        .unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.title, "Hello");
    assert_eq!(fetched.content, "World");
    assert!(fetched.artifacts.is_empty());
    assert_eq!(fetched.public_id, created.public_id);

    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_create_post_with_artifacts_signs_urls() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreatePostRequest::text("Trip", "")
        .with_artifact(CreateArtifactRequest::image("beach.jpg"))
        .with_artifact(CreateArtifactRequest::video("waves.mp4"));

    let response = server.post("/posts", &request).await.unwrap();
    let created: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.artifacts.len(), 2);
    for artifact in &created.artifacts {
        assert!(artifact.url.starts_with("https://ik.imagekit.io/integration/uploads/"));
        assert!(artifact.url.contains("ik-t="));
        assert!(artifact.url.contains("ik-s="));
    }
    assert_eq!(created.artifacts[0].content_type, "image");
    assert!(created.artifacts[1].thumbnail_url.is_some());

    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_create_post_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/posts", &CreatePostRequest::text("", "no title"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post("/posts", &CreatePostRequest::text("Title only", "  "))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get(&format!("/posts/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/posts/not-a-uuid").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    server.cleanup().await.unwrap();
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_empty_feed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/posts?page=3").await.unwrap();
    let page: PostPageResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.no_of_posts, 0);
    assert!(page.posts.is_empty());

    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_first_page_holds_newest_posts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    create_posts(&server, 15).await;

    let response = server.get("/posts?page=1&page_size=5").await.unwrap();
    let page: PostPageResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.no_of_posts, 15);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 1);
    let titles: Vec<&str> = page.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Post 15", "Post 14", "Post 13", "Post 12", "Post 11"]);

    let response = server.get("/posts?page=3&page_size=5").await.unwrap();
    let last: PostPageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let titles: Vec<&str> = last.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Post 5", "Post 4", "Post 3", "Post 2", "Post 1"]);

    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_page_past_the_end() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    create_posts(&server, 15).await;

    let response = server.get("/posts?page=4&page_size=5").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_default_page_size() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    create_posts(&server, 7).await;

    let response = server.get("/posts").await.unwrap();
    let page: PostPageResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.page_size, 5);
    assert_eq!(page.posts.len(), 5);
    assert_eq!(page.total_pages, 2);

    server.cleanup().await.unwrap();
}

// ============================================================================
// Media Tests
// ============================================================================

#[tokio::test]
async fn test_upload_auth_params() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/upload_auth_params").await.unwrap();
    let auth: UploadAuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.public_key, server.config.media.public_key);
    assert_eq!(auth.signature.len(), 40);
    assert!(!auth.token.is_empty());

    server.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_signed_url() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/signed_url?file_path=/uploads/cat.jpg&expire_seconds=60")
        .await
        .unwrap();
    let short: String = assert_json(response, StatusCode::OK).await.unwrap();
    let response = server
        .get("/signed_url?file_path=/uploads/cat.jpg&expire_seconds=3600")
        .await
        .unwrap();
    let long: String = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(short.starts_with("https://ik.imagekit.io/integration/uploads/cat.jpg?ik-t="));
    assert_ne!(short, long);

    let response = server.get("/signed_url?file_path=").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    server.cleanup().await.unwrap();
}
