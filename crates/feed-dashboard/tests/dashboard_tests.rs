//! Dashboard tests against a stub API and media host on a local port

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    extract::{Multipart, Query, State},
    http::{header, Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use feed_dashboard::{create_app, ApiClient, DashboardState, MediaUploader};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

#[derive(Clone, Default)]
struct Stub {
    log: Arc<Mutex<Vec<String>>>,
    created: Arc<Mutex<Option<Value>>>,
}

impl Stub {
    fn record(&self, entry: String) {
        self.log.lock().unwrap().push(entry);
    }

    fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[derive(Deserialize)]
struct PageQuery {
    page: i64,
    page_size: i64,
}

fn post_json(title: &str) -> Value {
    json!({
        "public_id": "0b9b8f0e-3c1e-4c55-9a4e-2f7f1d3b9a10",
        "title": title,
        "content": "From the stub",
        "created_at": "2024-05-17T10:30:00Z",
        "updated_at": "2024-05-17T10:30:00Z",
        "artifacts": [{
            "public_id": "5d6c1a7e-1111-4c55-9a4e-2f7f1d3b9a10",
            "url": "https://ik.imagekit.io/demo/cat.jpg?ik-t=1&ik-s=x",
            "content_type": "image",
            "thumbnail_url": null
        }]
    })
}

async fn list_posts(State(stub): State<Stub>, Query(q): Query<PageQuery>) -> (StatusCode, Json<Value>) {
    stub.record(format!("list:{}:{}", q.page, q.page_size));
    if q.page > 3 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": {"code": "PAGE_NOT_FOUND", "message": "Page 4 not found"}})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "no_of_posts": 11,
            "posts": [post_json("Stub Post")],
            "current_page": q.page,
            "total_pages": 3,
            "page_size": q.page_size
        })),
    )
}

async fn upload_auth(State(stub): State<Stub>) -> Json<Value> {
    let n = stub.log().iter().filter(|e| *e == "auth").count() + 1;
    stub.record("auth".to_string());
    Json(json!({
        "public_key": "public_test",
        "token": format!("tok-{n}"),
        "expire": 1_700_000_000,
        "signature": format!("sig-{n}")
    }))
}

async fn media_upload(State(stub): State<Stub>, mut multipart: Multipart) -> Json<Value> {
    let mut file_name = String::new();
    let mut token = String::new();
    let mut file_len = 0;
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "fileName" => file_name = field.text().await.unwrap(),
            "token" => token = field.text().await.unwrap(),
            "file" => file_len = field.bytes().await.unwrap().len(),
            _ => {}
        }
    }
    stub.record(format!("upload:{file_name}:{token}:{file_len}"));
    Json(json!({
        "fileId": format!("id-{file_name}"),
        "filePath": format!("/{file_name}"),
        "fileType": if file_name.ends_with(".png") { "image" } else { "non-image" },
        "url": format!("https://ik.imagekit.io/demo/{file_name}")
    }))
}

async fn create_post(State(stub): State<Stub>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    stub.record("create".to_string());
    let title = body["title"].as_str().unwrap_or_default().to_string();
    *stub.created.lock().unwrap() = Some(body);
    (StatusCode::CREATED, Json(post_json(&title)))
}

async fn start_stub() -> (String, Stub) {
    let stub = Stub::default();
    let app = Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/upload_auth_params", get(upload_auth))
        .route("/upload", post(media_upload))
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), stub)
}

async fn dashboard() -> (Router, Stub) {
    let (base, stub) = start_stub().await;
    let timeout = Duration::from_secs(5);
    let state = DashboardState::new(
        ApiClient::new(&base, timeout).unwrap(),
        MediaUploader::new(format!("{base}/upload"), timeout).unwrap(),
    );
    (create_app(state), stub)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const BOUNDARY: &str = "XfeedBoundary";

fn multipart_body(title: &str, caption: &str, files: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in [("title", title), ("caption", caption)] {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (file_name, content_type, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_feed_page_renders_posts() {
    let (app, stub) = dashboard().await;

    let response = app
        .oneshot(Request::builder().uri("/?page=2&page_size=4").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Stub Post"));
    assert!(html.contains("Page 2 of 3"));
    assert!(html.contains("https://ik.imagekit.io/demo/tr:w-600/cat.jpg"));
    assert_eq!(stub.log(), vec!["list:2:4"]);
}

#[tokio::test]
async fn test_feed_page_defaults_and_clamps() {
    let (app, stub) = dashboard().await;

    app.clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    app.oneshot(Request::builder().uri("/?page_size=80").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(stub.log(), vec!["list:1:5", "list:1:50"]);
}

#[tokio::test]
async fn test_feed_page_shows_api_failure() {
    let (app, _) = dashboard().await;

    let response = app
        .oneshot(Request::builder().uri("/?page=4").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains("Failed to load feed (404)"));
    assert!(html.contains("PAGE_NOT_FOUND"));
}

#[tokio::test]
async fn test_upload_form() {
    let (app, _) = dashboard().await;
    let response = app
        .oneshot(Request::builder().uri("/upload").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("enctype=\"multipart/form-data\""));
}

#[tokio::test]
async fn test_share_uploads_each_file_with_fresh_credentials() {
    let (app, stub) = dashboard().await;
    let body = multipart_body(
        "Holiday",
        "Sun and sea",
        &[
            ("beach.png", "image/png", &b"png-bytes"[..]),
            ("waves.mp4", "video/mp4", &b"mp4-bytes!"[..]),
        ],
    );

    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/?page=1");
    assert_eq!(
        stub.log(),
        vec![
            "auth",
            "upload:beach.png:tok-1:9",
            "auth",
            "upload:waves.mp4:tok-2:10",
            "create"
        ]
    );

    let created = stub.created.lock().unwrap().clone().unwrap();
    assert_eq!(created["title"], "Holiday");
    assert_eq!(created["content"], "Sun and sea");
    assert_eq!(created["artifacts"][0]["file_path"], "/beach.png");
    assert_eq!(created["artifacts"][1]["file_type"], "non-image");
}

#[tokio::test]
async fn test_share_text_only_post() {
    let (app, stub) = dashboard().await;
    let response = app
        .oneshot(upload_request(multipart_body("Hello", "World", &[])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(stub.log(), vec!["create"]);
    let created = stub.created.lock().unwrap().clone().unwrap();
    assert_eq!(created["artifacts"], json!([]));
}

#[tokio::test]
async fn test_share_without_title_is_rejected_before_any_call() {
    let (app, stub) = dashboard().await;
    let response = app
        .oneshot(upload_request(multipart_body(" ", "Caption", &[])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Please enter a title."));
    assert!(stub.log().is_empty());
}

#[tokio::test]
async fn test_share_needs_caption_or_file() {
    let (app, stub) = dashboard().await;
    let response = app
        .oneshot(upload_request(multipart_body("Title", "", &[])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response)
        .await
        .contains("Please add a caption or upload at least one file."));
    assert!(stub.log().is_empty());
}
