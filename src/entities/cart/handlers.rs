//! Cart HTTP handlers

use super::model::{AddToCartRequest, Cart, CartView, DEFAULT_QUANTITY, UpdateQuantityRequest};
use super::store::CartStore;
use crate::core::{EntityKind, ShopError};
use crate::entities::product::ProductStore;
use crate::server::extract::{JsonBody, parse_id};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

/// Cart-specific AppState
///
/// Carries the product store too: the add-to-cart route checks the catalog
/// and the cart read enriches line items with product data.
#[derive(Clone)]
pub struct CartAppState {
    pub carts: CartStore,
    pub products: ProductStore,
}

fn cart_and_product_ids(cid: &str, pid: &str) -> Result<(u64, u64), ShopError> {
    Ok((
        parse_id(EntityKind::Cart, cid)?,
        parse_id(EntityKind::Product, pid)?,
    ))
}

async fn require_cart(state: &CartAppState, id: u64) -> Result<Cart, ShopError> {
    state.carts.get_by_id(id).await.ok_or(ShopError::NotFound {
        entity: EntityKind::Cart,
        id,
    })
}

pub async fn list_carts(State(state): State<CartAppState>) -> Json<Vec<Cart>> {
    Json(state.carts.list_all().await)
}

pub async fn create_cart(
    State(state): State<CartAppState>,
) -> Result<(StatusCode, Json<Cart>), ShopError> {
    let cart = state.carts.create().await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

pub async fn get_cart(
    State(state): State<CartAppState>,
    Path(cid): Path<String>,
) -> Result<Json<CartView>, ShopError> {
    let id = parse_id(EntityKind::Cart, &cid)?;
    let cart = require_cart(&state, id).await?;
    let catalog = state.products.list_all().await;

    Ok(Json(CartView::enrich(cart, &catalog)))
}

pub async fn add_product_to_cart(
    State(state): State<CartAppState>,
    Path((cid, pid)): Path<(String, String)>,
    JsonBody(payload): JsonBody<AddToCartRequest>,
) -> Result<Json<Cart>, ShopError> {
    let (cart_id, product_id) = cart_and_product_ids(&cid, &pid)?;

    require_cart(&state, cart_id).await?;
    if state.products.get_by_id(product_id).await.is_none() {
        return Err(ShopError::NotFound {
            entity: EntityKind::Product,
            id: product_id,
        });
    }

    let quantity = payload.quantity.unwrap_or(DEFAULT_QUANTITY);
    state
        .carts
        .add_product(cart_id, product_id, quantity)
        .await
        .map(Json)
}

pub async fn remove_product_from_cart(
    State(state): State<CartAppState>,
    Path((cid, pid)): Path<(String, String)>,
) -> Result<Json<Cart>, ShopError> {
    let (cart_id, product_id) = cart_and_product_ids(&cid, &pid)?;
    state
        .carts
        .remove_product(cart_id, product_id)
        .await
        .map(Json)
}

pub async fn update_cart_product_quantity(
    State(state): State<CartAppState>,
    Path((cid, pid)): Path<(String, String)>,
    JsonBody(payload): JsonBody<UpdateQuantityRequest>,
) -> Result<Json<Cart>, ShopError> {
    let (cart_id, product_id) = cart_and_product_ids(&cid, &pid)?;
    let quantity = payload.quantity.ok_or(ShopError::MissingField {
        field: "quantity",
        required: &["quantity"],
    })?;

    state
        .carts
        .update_product_quantity(cart_id, product_id, quantity)
        .await
        .map(Json)
}

pub async fn clear_cart(
    State(state): State<CartAppState>,
    Path(cid): Path<String>,
) -> Result<Json<Cart>, ShopError> {
    let id = parse_id(EntityKind::Cart, &cid)?;
    state.carts.clear(id).await.map(Json)
}
