//! Handler tests for Products domain
//!
//! These tests drive `handlers::router` end to end over an in-memory
//! repository:
//! - Request deserialization (JSON → Product)
//! - Response serialization and content types
//! - HTTP status codes
//! - Error bodies, including the request path

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_helpers::ErrorResponse;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn app_with(repo: InMemoryProductRepository) -> Router {
    handlers::router(ProductService::new(repo))
}

async fn seeded() -> (InMemoryProductRepository, Router) {
    let repo = InMemoryProductRepository::new();
    repo.save_all(vec![
        Product::new("Laptop", 10, 1000.0),
        Product::new("Mouse", 50, 25.5),
    ])
    .await
    .unwrap();
    let app = app_with(repo.clone());
    (repo, app)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn text_body(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_add_product_returns_saved_product() {
    let app = app_with(InMemoryProductRepository::new());

    let response = app
        .oneshot(json_request(
            "POST",
            "/addProduct",
            json!({"name": "Laptop", "quantity": 10, "price": 1000.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 1);
    assert_eq!(product.name.as_deref(), Some("Laptop"));
    assert_eq!(product.price, 1000.0);
}

#[tokio::test]
async fn test_add_products_keeps_order() {
    let app = app_with(InMemoryProductRepository::new());

    let response = app
        .oneshot(json_request(
            "POST",
            "/addProducts",
            json!([
                {"name": "A", "quantity": 1, "price": 1.0},
                {"name": "B", "quantity": 2, "price": 2.0}
            ]),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name.as_deref(), Some("A"));
    assert_eq!(products[1].name.as_deref(), Some("B"));
    assert!(products[0].id < products[1].id);
}

#[tokio::test]
async fn test_add_products_empty_array() {
    let app = app_with(InMemoryProductRepository::new());

    let response = app
        .oneshot(json_request("POST", "/addProducts", json!([])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_list_products() {
    let (_, app) = seeded().await;

    let response = app.oneshot(get("/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2]);
}

#[tokio::test]
async fn test_get_by_id_found() {
    let (_, app) = seeded().await;

    let response = app.oneshot(get("/productById/2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name.as_deref(), Some("Mouse"));
}

#[tokio::test]
async fn test_get_by_id_not_found_body() {
    let app = app_with(InMemoryProductRepository::new());

    let response = app.oneshot(get("/productById/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.status, 404);
    assert_eq!(error.error, "Not Found");
    assert_eq!(error.message, "Product not found with id: 99");
    assert_eq!(error.path, "/productById/99");
}

#[tokio::test]
async fn test_get_by_id_rejects_non_integer() {
    let app = app_with(InMemoryProductRepository::new());

    let response = app.oneshot(get("/productById/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.path, "/productById/abc");
}

#[tokio::test]
async fn test_get_by_name() {
    let (_, app) = seeded().await;

    let response = app.oneshot(get("/product/Laptop")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 1);
}

#[tokio::test]
async fn test_get_by_name_not_found() {
    let (_, app) = seeded().await;

    let response = app.oneshot(get("/product/Keyboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Product not found with name: Keyboard");
}

#[tokio::test]
async fn test_update_partial_keeps_name() {
    let (repo, app) = seeded().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/update",
            json!({"id": 1, "quantity": 5, "price": 1500.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name.as_deref(), Some("Laptop"));
    assert_eq!(product.quantity, 5);
    assert_eq!(product.price, 1500.0);

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored, product);
}

#[tokio::test]
async fn test_update_missing_product() {
    let app = app_with(InMemoryProductRepository::new());

    let response = app
        .oneshot(json_request(
            "PUT",
            "/update",
            json!({"id": 999, "name": "X", "quantity": 1, "price": 1.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Product not found with id: 999");
    assert_eq!(error.path, "/update");
}

#[tokio::test]
async fn test_update_rejects_malformed_json() {
    let app = app_with(InMemoryProductRepository::new());

    let request = Request::builder()
        .method("PUT")
        .uri("/update")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"id\": 1,"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_returns_plain_text() {
    let (repo, app) = seeded().await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/delete/1")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(text_body(response.into_body()).await, "product removed !! 1");
    assert!(repo.find_by_id(1).await.unwrap().is_none());

    let response = app_with(repo).oneshot(get("/productById/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Product not found with id: 1");
}

#[tokio::test]
async fn test_delete_missing_product() {
    let app = app_with(InMemoryProductRepository::new());

    let request = Request::builder()
        .method("DELETE")
        .uri("/delete/5")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.path, "/delete/5");
}

#[tokio::test]
async fn test_export_csv() {
    let (_, app) = seeded().await;

    let response = app.oneshot(get("/products/csv")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap();
    assert!(disposition.contains("products.csv"));

    assert_eq!(
        text_body(response.into_body()).await,
        "id,name,quantity,price\n1,Laptop,10,1000.00\n2,Mouse,50,25.50\n"
    );
}

#[tokio::test]
async fn test_export_csv_empty_catalog() {
    let app = app_with(InMemoryProductRepository::new());

    let response = app.oneshot(get("/products/csv")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        text_body(response.into_body()).await,
        "id,name,quantity,price\n"
    );
}
