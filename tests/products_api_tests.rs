//! HTTP tests for the `/api/products` routes

mod common;

use axum::http::StatusCode;
use common::{create_product, json_file_server, product_body, server_in};
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_then_get_returns_same_product() {
    let (server, _dir) = json_file_server();

    let response = server.post("/api/products").json(&product_body("A1")).await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();

    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], true);
    assert_eq!(created["thumbnails"], json!([]));

    let fetched = server.get("/api/products/1").await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), created);
}

#[tokio::test]
async fn test_missing_required_field_is_rejected() {
    let (server, _dir) = json_file_server();

    for field in ["title", "description", "code", "price", "stock", "category"] {
        let mut body = product_body("X1");
        body.as_object_mut().unwrap().remove(field);

        let response = server.post("/api/products").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let error: Value = response.json();
        assert_eq!(error["code"], "MISSING_FIELD");
        assert_eq!(
            error["required"],
            json!(["title", "description", "code", "price", "stock", "category"])
        );
        assert!(error["error"].as_str().unwrap().contains(field));
    }

    let products: Value = server.get("/api/products").await.json();
    assert_eq!(products, json!([]));
}

#[tokio::test]
async fn test_empty_body_counts_as_missing_fields() {
    let (server, _dir) = json_file_server();

    let response = server.post("/api/products").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "MISSING_FIELD");
}

#[tokio::test]
async fn test_duplicate_code_is_rejected() {
    let (server, _dir) = json_file_server();
    create_product(&server, "DUP").await;

    let response = server.post("/api/products").json(&product_body("DUP")).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "DUPLICATE_CODE");

    let products: Vec<Value> = server.get("/api/products").await.json();
    assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn test_numeric_strings_are_accepted() {
    let (server, _dir) = json_file_server();
    let mut body = product_body("S1");
    body["price"] = json!("12.5");
    body["stock"] = json!("3");

    let response = server.post("/api/products").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["price"], 12.5);
    assert_eq!(created["stock"], 3.0);
}

#[tokio::test]
async fn test_wrongly_typed_price_is_a_bad_request() {
    let (server, _dir) = json_file_server();
    let mut body = product_body("T1");
    body["price"] = json!({ "amount": 3 });

    let response = server.post("/api/products").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_BODY");
}

#[tokio::test]
async fn test_malformed_json_is_a_bad_request() {
    let (server, _dir) = json_file_server();

    let response = server.post("/api/products").text("{ not json").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_BODY");
}

#[tokio::test]
async fn test_ids_are_max_plus_one() {
    let (server, _dir) = json_file_server();
    for code in ["I1", "I2", "I3"] {
        create_product(&server, code).await;
    }

    server.delete("/api/products/2").await.assert_status_ok();
    let next = create_product(&server, "I4").await;

    assert_eq!(next, 4);
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let (server, _dir) = json_file_server();
    create_product(&server, "U1").await;
    let before: Value = server.get("/api/products/1").await.json();

    let response = server
        .put("/api/products/1")
        .json(&json!({ "price": 20, "status": false }))
        .await;
    response.assert_status_ok();

    let after: Value = server.get("/api/products/1").await.json();
    assert_eq!(after["price"], 20.0);
    assert_eq!(after["status"], false);
    for field in ["id", "title", "description", "code", "stock", "category", "thumbnails"] {
        assert_eq!(after[field], before[field], "field {field} changed");
    }
}

#[tokio::test]
async fn test_update_rejects_id_change() {
    let (server, _dir) = json_file_server();
    create_product(&server, "U2").await;

    let response = server.put("/api/products/1").json(&json!({ "id": 7 })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_to_existing_code_is_rejected() {
    let (server, _dir) = json_file_server();
    create_product(&server, "C1").await;
    create_product(&server, "C2").await;

    let response = server
        .put("/api/products/2")
        .json(&json!({ "code": "C1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Re-sending a product's own code is not a conflict
    server
        .put("/api/products/1")
        .json(&json!({ "code": "C1" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let (server, _dir) = json_file_server();

    let response = server
        .put("/api/products/9")
        .json(&json!({ "title": "nope" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product() {
    let (server, _dir) = json_file_server();
    create_product(&server, "D1").await;

    let response = server.delete("/api/products/1").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Product 1 deleted" })
    );
    server
        .get("/api/products/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_product_leaves_file_unmodified() {
    let (server, dir) = json_file_server();
    create_product(&server, "K1").await;
    let file = dir.path().join("products.json");
    let before = std::fs::read_to_string(&file).unwrap();

    let response = server.delete("/api/products/42").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["error"],
        "Product with id 42 not found"
    );
    assert_eq!(std::fs::read_to_string(&file).unwrap(), before);
    let products: Vec<Value> = server.get("/api/products").await.json();
    assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn test_non_numeric_id_is_a_bad_request() {
    let (server, _dir) = json_file_server();

    let response = server.get("/api/products/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_ID");
}

#[tokio::test]
async fn test_products_persist_across_servers() {
    let (server, dir) = json_file_server();
    create_product(&server, "P1").await;
    drop(server);

    let document: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("products.json")).unwrap())
            .unwrap();
    assert_eq!(document["products"][0]["code"], "P1");

    let reopened = server_in(&dir);
    let products: Vec<Value> = reopened.get("/api/products").await.json();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["code"], "P1");
}

#[tokio::test]
async fn test_fractional_stock_is_accepted() {
    let (server, _dir) = json_file_server();
    let mut body = product_body("F1");
    body["stock"] = json!(2.5);

    let response = server.post("/api/products").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["stock"], 2.5);
}

#[tokio::test]
async fn test_existing_rows_survive_a_create() {
    let (server, dir) = json_file_server();
    let file = dir.path().join("products.json");
    let row = |id: u64, code: &str, stock: Value| {
        json!({
            "id": id, "title": code, "description": "seeded", "code": code,
            "price": 1.5, "status": true, "stock": stock, "category": "seed",
            "thumbnails": []
        })
    };
    let seeded = json!({ "products": [row(1, "A", json!(2.5)), row(2, "B", json!(3))] });
    std::fs::write(&file, seeded.to_string()).unwrap();

    let products: Vec<Value> = server.get("/api/products").await.json();
    assert_eq!(products.len(), 2);

    let id = create_product(&server, "NEW").await;
    assert_eq!(id, 3);

    let document: Value = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    let codes: Vec<&str> = document["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["A", "B", "NEW"]);
    assert_eq!(document["products"][0]["stock"], 2.5);
}

#[tokio::test]
async fn test_unreadable_file_is_not_overwritten() {
    let (server, dir) = json_file_server();
    let file = dir.path().join("products.json");
    let unreadable = r#"{ "products": [{ "id": 1, "title": 7 }] }"#;
    std::fs::write(&file, unreadable).unwrap();

    let products: Value = server.get("/api/products").await.json();
    assert_eq!(products, json!([]));

    let response = server.post("/api/products").json(&product_body("Z1")).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["code"], "INTERNAL_ERROR");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), unreadable);
}

#[tokio::test]
async fn test_saved_rows_keep_field_order() {
    let (server, dir) = json_file_server();
    create_product(&server, "O1").await;

    let raw = std::fs::read_to_string(dir.path().join("products.json")).unwrap();
    let position = |key: &str| raw.find(&format!("\"{key}\"")).unwrap();
    assert!(position("id") < position("title"), "{raw}");
    assert!(position("title") < position("description"), "{raw}");
    assert!(position("stock") < position("category"), "{raw}");
}

#[tokio::test]
async fn test_unwritable_data_dir_is_an_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let not_a_dir = dir.path().join("occupied");
    std::fs::write(&not_a_dir, "").unwrap();
    let config = shop::config::ServerConfig {
        data_dir: not_a_dir,
        ..Default::default()
    };
    let server =
        axum_test::TestServer::new(shop::server::ServerBuilder::new().with_config(config).build());

    let response = server.post("/api/products").json(&product_body("W1")).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["code"], "INTERNAL_ERROR");
}
