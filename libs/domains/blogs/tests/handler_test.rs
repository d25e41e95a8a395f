//! Handler tests for the blogs domain
//!
//! These drive the blog router directly with `oneshot`, backed by the
//! in-memory repository:
//! - Request parsing and validation messages
//! - The `{success, message, data}` envelope
//! - HTTP status codes for every error kind

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_blogs::*;
use http_body_util::BodyExt;
use sea_orm::DbErr;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(BlogService::new(InMemoryBlogRepository::new()))
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_blog_returns_201_with_envelope() {
    let app = app();
    let data = TestDataBuilder::from_test_name("test_create_blog_returns_201_with_envelope");

    let json = create(
        &app,
        json!({
            "title": data.title("create"),
            "content": data.content("create"),
            "author": data.author(),
        }),
    )
    .await;

    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Blog created successfully");
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["title"], data.title("create"));
    assert_eq!(json["data"]["author"], data.author());
}

#[tokio::test]
async fn test_create_blog_reports_validation_errors() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({"title": "ab", "content": "short", "author": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Validation error: [author is required, \
         content must be at least 10 characters long, \
         title must be at least 3 characters long]"
    );
}

#[tokio::test]
async fn test_create_blog_rejects_malformed_body() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["message"], "Invalid request body");
}

#[tokio::test]
async fn test_get_blog_round_trip() {
    let app = app();
    let created = create(
        &app,
        json!({
            "title": "Test Blog",
            "content": "This is a test blog post",
            "author": "Test Author",
        }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(empty_request("GET", &format!("/{id}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["message"], "Blog retrieved successfully");
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["title"], "Test Blog");
    assert_eq!(json["data"]["content"], "This is a test blog post");
    assert_eq!(json["data"]["author"], "Test Author");
}

#[tokio::test]
async fn test_get_missing_blog_returns_404() {
    let response = app()
        .oneshot(empty_request("GET", "/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response.into_body()).await;
    assert_eq!(
        json,
        json!({"success": false, "message": "Blog with ID 999 not found"})
    );
}

#[tokio::test]
async fn test_invalid_ids_return_400() {
    let app = app();

    for (method, uri) in [
        ("GET", "/abc"),
        ("GET", "/-1"),
        ("DELETE", "/0"),
        ("GET", "/99999999999"),
    ] {
        let response = app.clone().oneshot(empty_request(method, uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
        let json = json_body(response.into_body()).await;
        assert_eq!(json["message"], "Invalid blog ID");
    }
}

#[tokio::test]
async fn test_update_checks_id_before_body() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/abc")
                .header("content-type", "application/json")
                .body(Body::from("garbage"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["message"], "Invalid blog ID");
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = app();
    let created = create(
        &app,
        json!({
            "title": "Test Blog",
            "content": "This is a test blog post",
            "author": "Test Author",
        }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{id}"),
            json!({"title": "Updated Title", "content": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["message"], "Blog updated successfully");
    assert_eq!(json["data"]["title"], "Updated Title");

    let response = app
        .oneshot(empty_request("GET", &format!("/{id}")))
        .await
        .unwrap();
    let json = json_body(response.into_body()).await;
    assert_eq!(json["data"]["title"], "Updated Title");
    assert_eq!(json["data"]["content"], "This is a test blog post");
    assert_eq!(json["data"]["author"], "Test Author");
}

#[tokio::test]
async fn test_update_validates_present_fields() {
    let app = app();
    create(
        &app,
        json!({
            "title": "Test Blog",
            "content": "This is a test blog post",
            "author": "Test Author",
        }),
    )
    .await;

    let response = app
        .oneshot(json_request("PUT", "/1", json!({"author": "x".repeat(51)})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response.into_body()).await;
    assert_eq!(
        json["message"],
        "Validation error: [author must not be longer than 50 characters]"
    );
}

#[tokio::test]
async fn test_update_missing_blog_returns_404() {
    let response = app()
        .oneshot(json_request("PUT", "/5", json!({"title": "Updated Title"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_returns_404() {
    let app = app();
    create(
        &app,
        json!({
            "title": "Test Blog",
            "content": "This is a test blog post",
            "author": "Test Author",
        }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response.into_body()).await;
    assert_eq!(
        json,
        json!({"success": true, "message": "Blog deleted successfully"})
    );

    for method in ["GET", "DELETE"] {
        let response = app.clone().oneshot(empty_request(method, "/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");
    }
}

#[tokio::test]
async fn test_list_blogs() {
    let app = app();

    let response = app.clone().oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["message"], "Blogs retrieved successfully");
    assert_eq!(json["data"], json!([]));

    for i in 0..3 {
        create(
            &app,
            json!({
                "title": format!("Post number {i}"),
                "content": "This is a test blog post",
                "author": "Test Author",
            }),
        )
        .await;
    }

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    let json = json_body(response.into_body()).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

/// Repository whose storage is permanently unreachable.
struct BrokenRepository;

fn unreachable_db() -> RepositoryError {
    RepositoryError::Database(DbErr::Custom("connection refused: 10.0.0.5".into()))
}

#[async_trait]
impl BlogRepository for BrokenRepository {
    async fn create(&self, _blog: Blog) -> RepositoryResult<Blog> {
        Err(unreachable_db())
    }

    async fn get_by_id(&self, _id: i64) -> RepositoryResult<Option<Blog>> {
        Err(unreachable_db())
    }

    async fn update(&self, _blog: Blog) -> RepositoryResult<Blog> {
        Err(unreachable_db())
    }

    async fn delete(&self, _id: i64) -> RepositoryResult<()> {
        Err(unreachable_db())
    }

    async fn list(&self) -> RepositoryResult<Vec<Blog>> {
        Err(unreachable_db())
    }
}

#[tokio::test]
async fn test_storage_failures_hide_raw_error_text() {
    let app = handlers::router(BlogService::new(BrokenRepository));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "title": "Test Blog",
                "content": "This is a test blog post",
                "author": "Test Author",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["message"], "Failed to create blog");

    let response = app.clone().oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["message"], "Failed to retrieve blogs");

    // Lookups collapse every storage failure into NotFound.
    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["message"], "Blog with ID 1 not found");
}
