//! Product endpoint tests

use crate::common::*;
use axum::http::StatusCode;
use flatstore::Resource;
use serde_json::json;

fn widget() -> serde_json::Value {
    json!([{
        "id": "1",
        "name": "Widget",
        "description": "A widget",
        "categoryId": "1",
        "price": 9.99
    }])
}

#[tokio::test]
async fn price_range_query() {
    let (_dir, app) = app(&[(Resource::Products, widget())]);

    let hit = get(&app, "/api/products?minPrice=5&maxPrice=15").await;
    assert_eq!(hit.status, StatusCode::OK);
    assert_eq!(hit.json(), widget());

    let miss = get(&app, "/api/products?minPrice=10").await;
    assert_eq!(miss.status, StatusCode::OK);
    assert_eq!(miss.json(), json!([]));
}

#[tokio::test]
async fn empty_query_params_are_ignored() {
    let (_dir, app) = app(&[(Resource::Products, widget())]);

    let reply = get(&app, "/api/products?name=&minPrice=").await;

    assert_eq!(reply.json(), widget());
}

#[tokio::test]
async fn search_endpoint() {
    let (_dir, app) = app(&[(Resource::Products, widget())]);

    let hit = get(&app, "/api/products/search?query=widget&fields=name&exact=false").await;
    assert_eq!(hit.status, StatusCode::OK);
    assert_eq!(hit.json()[0]["name"], json!("Widget"));

    let miss = get(&app, "/api/products/search?query=gadget").await;
    assert_eq!(miss.json(), json!([]));

    let bad = get(&app, "/api/products/search").await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad.json(), json!({"error": "Search query is required"}));
}

#[tokio::test]
async fn category_route() {
    let (_dir, app) = app(&[(Resource::Products, widget())]);

    let reply = get(&app, "/api/products/category/1").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), widget());
}

#[tokio::test]
async fn create_then_get() {
    let (_dir, app) = app(&[(Resource::Products, widget())]);

    let created = send(&app, "POST", "/api/products", Some(r#"{"name":"Gear","price":2}"#)).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let created = created.json();
    assert_eq!(created["id"], json!("2"));

    let fetched = get(&app, "/api/products/2").await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), created);
}

#[tokio::test]
async fn update_keeps_id() {
    let (_dir, app) = app(&[(Resource::Products, widget())]);

    let reply = send(&app, "PUT", "/api/products/1", Some(r#"{"id":"9","price":12}"#)).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["id"], json!("1"));
    assert_eq!(reply.json()["price"], json!(12));
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let (_dir, app) = app(&[(Resource::Products, widget())]);

    let deleted = send(&app, "DELETE", "/api/products/1", None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json(), json!({"message": "Product deleted successfully"}));

    let gone = get(&app, "/api/products/1").await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.json(), json!({"error": "Product not found"}));
}

#[tokio::test]
async fn missing_file_is_500_without_details() {
    let (_dir, app) = app(&[]);

    let reply = get(&app, "/api/products").await;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.json(), json!({"error": "Failed to fetch products"}));
}

#[tokio::test]
async fn malformed_body_is_400() {
    let (_dir, app) = app(&[(Resource::Products, widget())]);

    let broken = send(&app, "POST", "/api/products", Some("{\"name\": ")).await;
    assert_eq!(broken.status, StatusCode::BAD_REQUEST);
    assert!(broken.json()["error"].is_string());

    let not_object = send(&app, "POST", "/api/products", Some("[1,2]")).await;
    assert_eq!(not_object.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        not_object.json(),
        json!({"error": "Request body must be a JSON object"})
    );
}
