//! Routing, fallback and cross-origin tests

use crate::common::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use flatstore::Resource;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn unknown_route_is_json_404() {
    let (_dir, app) = app(&[]);

    let reply = get(&app, "/api/nothing-here").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.json(), json!({"error": "Not found"}));

    let outside = get(&app, "/products").await;
    assert_eq!(outside.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn read_only_resources() {
    let (_dir, app) = app(&[
        (Resource::Categories, json!([{"id": 1, "name": "Tools"}])),
        (Resource::Orders, json!([{"id": 1, "userId": 3}, {"id": 2, "userId": 4}])),
        (Resource::Sales, json!([{"month": "Jan", "total": 10}])),
    ]);

    assert_eq!(get(&app, "/api/categories/1").await.json()["name"], json!("Tools"));
    assert_eq!(
        get(&app, "/api/categories/2").await.json(),
        json!({"error": "Category not found"})
    );
    assert_eq!(
        get(&app, "/api/orders?userId=4").await.json(),
        json!([{"id": 2, "userId": 4}])
    );
    assert_eq!(
        get(&app, "/api/orders/7").await.json(),
        json!({"error": "Order not found"})
    );
    assert_eq!(
        get(&app, "/api/sales").await.json(),
        json!([{"month": "Jan", "total": 10}])
    );
}

#[tokio::test]
async fn missing_sales_file_uses_sales_message() {
    let (_dir, app) = app(&[]);

    let reply = get(&app, "/api/sales").await;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.json(), json!({"error": "Failed to fetch sales data"}));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (_dir, app) = app(&[(Resource::Sales, json!([]))]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/sales")
                .header("origin", "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

#[tokio::test]
async fn routes_can_mount_at_root() {
    let dir = tempfile::TempDir::new().unwrap();
    let paths = flatstore::ResourcePaths::in_dir(dir.path());
    std::fs::write(paths.get(Resource::Sales), "[]").unwrap();
    let executor = flatstore::Executor::new(std::sync::Arc::new(flatstore::FileStore::new(paths)));
    let app = flatstore::server::router(executor, "/");

    let reply = get(&app, "/sales").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!([]));
}

#[tokio::test]
async fn undecodable_path_param_is_json_400() {
    let (_dir, app) = app(&[(Resource::Products, json!([]))]);

    let reply = get(&app, "/api/products/%FF").await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(reply.json()["error"].as_str().unwrap().contains("UTF-8"));
}

#[tokio::test]
async fn unsupported_method_is_json_405() {
    let (_dir, app) = app(&[(Resource::Products, json!([{"id": "1"}]))]);

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/products/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.headers().contains_key("allow"));
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn trailing_slash_is_ignored() {
    let (_dir, app) = app(&[
        (Resource::Products, json!([{"id": "1", "name": "Widget"}])),
        (Resource::Users, json!([{"id": 1, "username": "a"}])),
    ]);

    let list = get(&app, "/api/products/").await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.json(), json!([{"id": "1", "name": "Widget"}]));

    let one = get(&app, "/api/users/1/").await;
    assert_eq!(one.status, StatusCode::OK);
    assert_eq!(one.json(), json!({"id": 1, "username": "a"}));
}
