//! Product HTTP handlers

use super::model::{CreateProductRequest, Product, UpdateProductRequest};
use super::store::ProductStore;
use crate::core::{EntityKind, ShopError};
use crate::server::extract::{JsonBody, parse_id};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};

/// Product-specific AppState
#[derive(Clone)]
pub struct ProductAppState {
    pub store: ProductStore,
}

pub async fn list_products(State(state): State<ProductAppState>) -> Json<Vec<Product>> {
    Json(state.store.list_all().await)
}

pub async fn get_product(
    State(state): State<ProductAppState>,
    Path(pid): Path<String>,
) -> Result<Json<Product>, ShopError> {
    let id = parse_id(EntityKind::Product, &pid)?;

    state
        .store
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or(ShopError::NotFound {
            entity: EntityKind::Product,
            id,
        })
}

pub async fn create_product(
    State(state): State<ProductAppState>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ShopError> {
    let product = state.store.create(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<ProductAppState>,
    Path(pid): Path<String>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> Result<Json<Product>, ShopError> {
    let id = parse_id(EntityKind::Product, &pid)?;
    state.store.update(id, payload).await.map(Json)
}

pub async fn delete_product(
    State(state): State<ProductAppState>,
    Path(pid): Path<String>,
) -> Result<Json<Value>, ShopError> {
    let id = parse_id(EntityKind::Product, &pid)?;
    state.store.delete(id).await?;

    Ok(Json(json!({
        "message": format!("Product {id} deleted")
    })))
}
