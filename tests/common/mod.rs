//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use shop::prelude::*;
use tempfile::TempDir;

/// A test server backed by JSON collection files in a fresh temp directory
///
/// The directory is removed when the returned `TempDir` is dropped, so keep
/// it alive for the duration of the test.
pub fn json_file_server() -> (TestServer, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let server = server_in(&dir);
    (server, dir)
}

/// Build a server over the collection files of an existing directory
pub fn server_in(dir: &TempDir) -> TestServer {
    let config = ServerConfig {
        data_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    };
    TestServer::new(ServerBuilder::new().with_config(config).build())
}

/// A valid product creation body with the given code
pub fn product_body(code: &str) -> Value {
    json!({
        "title": format!("Product {code}"),
        "description": "A product used in tests",
        "code": code,
        "price": 9.99,
        "stock": 10,
        "category": "tests"
    })
}

/// Create a product and return its id
pub async fn create_product(server: &TestServer, code: &str) -> u64 {
    let response = server.post("/api/products").json(&product_body(code)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_u64().unwrap()
}

/// Create an empty cart and return its id
pub async fn create_cart(server: &TestServer) -> u64 {
    let response = server.post("/api/carts").await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_u64().unwrap()
}
