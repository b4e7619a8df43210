//! Handler tests for the Catalog domain
//!
//! These tests drive the catalog router over in-memory repositories:
//! - Query string parsing and validation
//! - Pagination envelope and DTO serialization
//! - HTTP status codes and error envelopes

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_catalog::*;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt; // For oneshot()

const API_URL: &str = "http://localhost:8080/";

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn brands() -> Vec<ProductBrand> {
    ["Angular", "NetCore", "VS Code"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| ProductBrand {
            id,
            name: name.to_string(),
        })
        .collect()
}

fn types() -> Vec<ProductType> {
    ["Boards", "Hats"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| ProductType {
            id,
            name: name.to_string(),
        })
        .collect()
}

fn product(id: i32, name: String, brand: i32) -> Product {
    Product {
        id,
        name,
        description: format!("Description {}", id),
        price: f64::from(id) * 10.0,
        picture_url: format!("images/products/{}.png", id),
        product_type_id: if id % 2 == 0 { 2 } else { 1 },
        product_brand_id: brand,
        product_type: None,
        product_brand: None,
    }
}

fn app(products: Vec<Product>) -> Router {
    let repositories = CatalogRepositories::in_memory(brands(), types(), products);
    handlers::router(CatalogService::new(repositories, ProductMapper::new(API_URL)))
}

/// Twelve products whose name order matches their id order.
fn twelve_products() -> Router {
    app((1..=12)
        .map(|id| product(id, format!("Product {:02}", id), 1))
        .collect())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

fn ids(page: &Value) -> Vec<i64> {
    page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_brand_filter_returns_matching_products_in_name_order() {
    // Names sort in reverse id order; six of fifteen belong to brand 2.
    let products = (1..=15)
        .map(|id| {
            let brand = if id % 5 == 0 || id % 5 == 2 { 2 } else { 1 };
            product(id, format!("Product {:02}", 100 - id), brand)
        })
        .collect();

    let (status, page) = get(app(products), "/?brandId=2&pageSize=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 6);
    assert_eq!(page["pageIndex"], 1);
    assert_eq!(page["pageSize"], 10);
    assert_eq!(ids(&page), vec![15, 12, 10, 7, 5, 2]);
    assert!(page["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["productBrand"] == "NetCore"));
}

#[tokio::test]
async fn test_second_page_returns_rows_six_to_ten() {
    let (status, page) = get(twelve_products(), "/?pageIndex=2&pageSize=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 12);
    assert_eq!(ids(&page), vec![6, 7, 8, 9, 10]);
}

#[tokio::test]
async fn test_last_page_is_partial() {
    let (_, page) = get(twelve_products(), "/?pageIndex=3&pageSize=5").await;

    assert_eq!(page["count"], 12);
    assert_eq!(ids(&page), vec![11, 12]);
}

#[tokio::test]
async fn test_page_beyond_end_is_empty_with_full_count() {
    let (status, page) = get(twelve_products(), "/?pageIndex=9&pageSize=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 12);
    assert!(ids(&page).is_empty());
}

#[tokio::test]
async fn test_defaults_to_first_six_products() {
    let (_, page) = get(twelve_products(), "/").await;

    assert_eq!(page["pageIndex"], 1);
    assert_eq!(page["pageSize"], 6);
    assert_eq!(ids(&page), vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_oversized_page_is_clamped() {
    let (_, page) = get(twelve_products(), "/?pageSize=500").await;

    assert_eq!(page["pageSize"], 50);
    assert_eq!(ids(&page).len(), 12);
}

#[tokio::test]
async fn test_sort_by_price_descending() {
    let (_, page) = get(twelve_products(), "/?sort=priceDesc&pageSize=3").await;

    assert_eq!(ids(&page), vec![12, 11, 10]);
}

#[tokio::test]
async fn test_unknown_sort_falls_back_to_name() {
    let (_, page) = get(twelve_products(), "/?sort=popular&pageSize=3").await;

    assert_eq!(ids(&page), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_search_and_type_filters_combine() {
    let (_, page) = get(twelve_products(), "/?search=%20PRODUCT%201&typeId=2").await;

    // "product 1" matches 10, 11 and 12; type 2 keeps the even ids.
    assert_eq!(page["count"], 2);
    assert_eq!(ids(&page), vec![10, 12]);
}

#[tokio::test]
async fn test_product_detail_is_mapped() {
    let (status, product) = get(twelve_products(), "/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["id"], 3);
    assert_eq!(product["name"], "Product 03");
    assert_eq!(product["price"], 30.0);
    assert_eq!(
        product["pictureUrl"],
        "http://localhost:8080/images/products/3.png"
    );
    assert_eq!(product["productType"], "Boards");
    assert_eq!(product["productBrand"], "Angular");
}

#[tokio::test]
async fn test_missing_product_returns_404_envelope() {
    let (status, body) = get(twelve_products(), "/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Product 999 not found");
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let (status, body) = get(twelve_products(), "/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_zero_page_index_returns_400() {
    let (status, body) = get(twelve_products(), "/?pageIndex=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_page_size_returns_400() {
    let (status, body) = get(twelve_products(), "/?pageSize=-1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_brands_and_types_endpoints() {
    let (status, brands) = get(twelve_products(), "/brands").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(brands.as_array().unwrap().len(), 3);
    assert_eq!(brands[1], serde_json::json!({ "id": 2, "name": "NetCore" }));

    let (status, types) = get(twelve_products(), "/types").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(types[0]["name"], "Boards");
}
