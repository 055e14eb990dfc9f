//! Request extractors shared by all route groups
//!
//! Both extractors reject with [`ShopError`], so a malformed id or body
//! produces the same JSON error shape as every other failure.

use crate::core::{EntityKind, ShopError};
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor that tolerates an empty body
///
/// Unlike `axum::Json`, no `Content-Type` is required and an empty body
/// yields `T::default()`. This lets clients call endpoints such as
/// `POST /api/carts/{cid}/product/{pid}` without sending anything.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn add_product(
///     JsonBody(payload): JsonBody<AddToCartRequest>,
/// ) -> Result<Json<Cart>, ShopError> {
///     let quantity = payload.quantity.unwrap_or(DEFAULT_QUANTITY);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ShopError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ShopError::InvalidBody(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ShopError::InvalidBody(e.to_string()))
    }
}

/// Parse a path segment as an entity id
pub fn parse_id(entity: EntityKind, raw: &str) -> Result<u64, ShopError> {
    raw.trim().parse::<u64>().map_err(|_| ShopError::InvalidId {
        entity,
        raw: raw.to_string(),
    })
}
