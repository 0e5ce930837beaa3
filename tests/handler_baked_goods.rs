mod common;

use axum::http::StatusCode;
use bakery_api::error::RECORD_NOT_FOUND;
use serde_json::{Value, json};

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_baked_good_success() {
    let pool = common::test_pool().await;
    let bakery_id = common::create_test_bakery(&pool, "North").await;
    let server = common::make_server(pool);

    let response = server
        .post("/baked_goods")
        .form(&[
            ("name", "Croissant"),
            ("price", "3.50"),
            ("bakery_id", &bakery_id.to_string()),
        ])
        .await;

    response.assert_status(StatusCode::CREATED);

    let created = response.json::<Value>();
    assert_eq!(created["name"], "Croissant");
    assert_eq!(created["price"], 3.5);
    assert_eq!(created["bakery_id"], bakery_id);
    assert_eq!(created["bakery"]["name"], "North");
    assert!(created["bakery"].get("baked_goods").is_none());

    let id = created["id"].as_i64().unwrap();
    let fetched = server.get(&format!("/baked_goods/{id}")).await;

    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), created);
}

#[tokio::test]
async fn test_create_baked_good_without_bakery() {
    let server = common::make_server(common::test_pool().await);

    let response = server
        .post("/baked_goods")
        .form(&[("name", "Bagel"), ("price", "1")])
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert!(body["bakery_id"].is_null());
    assert!(body["bakery"].is_null());
}

#[tokio::test]
async fn test_create_baked_good_missing_price() {
    let server = common::make_server(common::test_pool().await);

    let response = server.post("/baked_goods").form(&[("name", "Bagel")]).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["details"].get("price").is_some());
}

#[tokio::test]
async fn test_create_baked_good_malformed_price() {
    let server = common::make_server(common::test_pool().await);

    let response = server
        .post("/baked_goods")
        .form(&[("name", "Bagel"), ("price", "three fifty")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Validation failed");
}

#[tokio::test]
async fn test_create_baked_good_negative_price() {
    let server = common::make_server(common::test_pool().await);

    let response = server
        .post("/baked_goods")
        .form(&[("name", "Bagel"), ("price", "-2")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_baked_good_unknown_bakery() {
    let server = common::make_server(common::test_pool().await);

    let response = server
        .post("/baked_goods")
        .form(&[("name", "Bagel"), ("price", "2"), ("bakery_id", "42")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["details"].get("bakery_id").is_some());
}

#[tokio::test]
async fn test_create_duplicate_key_is_json_bad_request() {
    let server = common::make_server(common::test_pool().await);

    let response = server
        .post("/baked_goods")
        .form(&[("name", "A"), ("name", "B"), ("price", "1")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Validation failed");
    assert!(body["details"].get("body").is_some());
}

#[tokio::test]
async fn test_create_json_body_is_json_bad_request() {
    let server = common::make_server(common::test_pool().await);

    let response = server
        .post("/baked_goods")
        .json(&json!({ "name": "Bagel", "price": "1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Validation failed");
    assert!(body["details"].get("body").is_some());
}

#[tokio::test]
async fn test_create_without_body_reports_missing_fields() {
    let server = common::make_server(common::test_pool().await);

    let response = server.post("/baked_goods").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let details = response.json::<Value>()["details"].clone();
    assert!(details.get("name").is_some());
    assert!(details.get("price").is_some());
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_baked_good_not_found() {
    let server = common::make_server(common::test_pool().await);

    let response = server.get("/baked_goods/999").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "This record does not exist in our database. Please try again." })
    );
}

#[tokio::test]
async fn test_list_baked_goods() {
    let pool = common::test_pool().await;
    let bakery = common::create_test_bakery(&pool, "North").await;
    common::create_test_baked_good(&pool, "Cake", 20.0, Some(bakery)).await;
    common::create_test_baked_good(&pool, "Roll", 1.0, None).await;
    let server = common::make_server(pool);

    let response = server.get("/baked_goods").await;

    response.assert_status_ok();

    let items = response.json::<Value>();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Cake");
    assert_eq!(items[0]["bakery"]["name"], "North");
    assert!(items[1]["bakery"].is_null());
}

// ─── PATCH ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_price_only() {
    let pool = common::test_pool().await;
    let bakery = common::create_test_bakery(&pool, "North").await;
    let id = common::create_test_baked_good(&pool, "Croissant", 3.5, Some(bakery)).await;
    let server = common::make_server(pool);

    let response = server
        .patch(&format!("/baked_goods/{id}"))
        .form(&[("price", "9.99")])
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["price"], 9.99);
    assert_eq!(body["name"], "Croissant");
    assert_eq!(body["bakery_id"], bakery);
}

#[tokio::test]
async fn test_update_moves_and_detaches_bakery() {
    let pool = common::test_pool().await;
    let north = common::create_test_bakery(&pool, "North").await;
    let south = common::create_test_bakery(&pool, "South").await;
    let id = common::create_test_baked_good(&pool, "Croissant", 3.5, Some(north)).await;
    let server = common::make_server(pool);

    let moved = server
        .patch(&format!("/baked_goods/{id}"))
        .form(&[("bakery_id", &south.to_string())])
        .await;

    moved.assert_status_ok();
    assert_eq!(moved.json::<Value>()["bakery"]["name"], "South");

    let detached = server
        .patch(&format!("/baked_goods/{id}"))
        .form(&[("bakery_id", "")])
        .await;

    detached.assert_status_ok();
    let body = detached.json::<Value>();
    assert!(body["bakery_id"].is_null());
    assert!(body["bakery"].is_null());
}

#[tokio::test]
async fn test_update_ignores_unknown_keys() {
    let pool = common::test_pool().await;
    let id = common::create_test_baked_good(&pool, "Croissant", 3.5, None).await;
    let server = common::make_server(pool);

    let response = server
        .patch(&format!("/baked_goods/{id}"))
        .form(&[("id", "77"), ("name", "Butter croissant")])
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Butter croissant");
}

#[tokio::test]
async fn test_update_with_only_unknown_keys_returns_record_unchanged() {
    let pool = common::test_pool().await;
    let bakery = common::create_test_bakery(&pool, "North").await;
    let id = common::create_test_baked_good(&pool, "Croissant", 3.5, Some(bakery)).await;
    let server = common::make_server(pool);

    let original = server.get(&format!("/baked_goods/{id}")).await;
    let response = server
        .patch(&format!("/baked_goods/{id}"))
        .form(&[("id", "9")])
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), original.json::<Value>());
    server.get("/baked_goods/9").await.assert_status_not_found();
}

#[tokio::test]
async fn test_update_without_body_returns_record_unchanged() {
    let pool = common::test_pool().await;
    let id = common::create_test_baked_good(&pool, "Croissant", 3.5, None).await;
    let server = common::make_server(pool);

    let response = server.patch(&format!("/baked_goods/{id}")).await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Croissant");
    assert_eq!(body["price"], 3.5);
}

#[tokio::test]
async fn test_update_unknown_bakery_rejected() {
    let pool = common::test_pool().await;
    let id = common::create_test_baked_good(&pool, "Croissant", 3.5, None).await;
    let server = common::make_server(pool);

    let response = server
        .patch(&format!("/baked_goods/{id}"))
        .form(&[("bakery_id", "404")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_not_found() {
    let server = common::make_server(common::test_pool().await);

    let response = server
        .patch("/baked_goods/999")
        .form(&[("price", "1.00")])
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>(), json!({ "message": RECORD_NOT_FOUND }));
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let pool = common::test_pool().await;
    let id = common::create_test_baked_good(&pool, "Croissant", 3.5, None).await;
    let server = common::make_server(pool);

    let response = server.delete(&format!("/baked_goods/{id}")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "delete_successful": true, "message": "Baked good deleted." })
    );

    let again = server.get(&format!("/baked_goods/{id}")).await;
    again.assert_status_not_found();
    assert_eq!(again.json::<Value>(), json!({ "message": RECORD_NOT_FOUND }));
}

#[tokio::test]
async fn test_delete_not_found() {
    let server = common::make_server(common::test_pool().await);

    let response = server.delete("/baked_goods/999").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>(), json!({ "message": RECORD_NOT_FOUND }));
}

// ─── PRICE QUERIES ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_by_price_is_non_decreasing_and_ends_with_most_expensive() {
    let pool = common::test_pool().await;
    let bakery = common::create_test_bakery(&pool, "North").await;
    common::create_test_baked_good(&pool, "Cake", 20.0, Some(bakery)).await;
    common::create_test_baked_good(&pool, "Roll", 1.0, Some(bakery)).await;
    common::create_test_baked_good(&pool, "Pie", 7.5, None).await;
    common::create_test_baked_good(&pool, "Scone", 2.25, Some(bakery)).await;
    let server = common::make_server(pool);

    let response = server.get("/baked_goods/by_price").await;

    response.assert_status_ok();

    let items = response.json::<Value>();
    let prices: Vec<f64> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![1.0, 2.25, 7.5, 20.0]);

    let most = server.get("/baked_goods/most_expensive").await;

    most.assert_status_ok();
    assert_eq!(&most.json::<Value>(), items.as_array().unwrap().last().unwrap());
}

#[tokio::test]
async fn test_most_expensive_tie_prefers_lowest_id() {
    let pool = common::test_pool().await;
    let first = common::create_test_baked_good(&pool, "First cake", 30.0, None).await;
    common::create_test_baked_good(&pool, "Second cake", 30.0, None).await;
    common::create_test_baked_good(&pool, "Cookie", 1.0, None).await;
    let server = common::make_server(pool);

    let response = server.get("/baked_goods/most_expensive").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], first);
}

#[tokio::test]
async fn test_most_expensive_empty_is_not_found() {
    let server = common::make_server(common::test_pool().await);

    let response = server.get("/baked_goods/most_expensive").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>(), json!({ "message": RECORD_NOT_FOUND }));
}

#[tokio::test]
async fn test_by_price_empty() {
    let server = common::make_server(common::test_pool().await);

    let response = server.get("/baked_goods/by_price").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}
