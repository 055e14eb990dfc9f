//! Typed error handling for the shop API
//!
//! Every store operation and every handler returns [`ShopError`], which knows
//! its own HTTP status and stable error code. Handlers never build error
//! responses by hand; they return the error and let [`IntoResponse`] render
//! it.
//!
//! # Status mapping
//!
//! - `MissingField`, `Validation`, `DuplicateCode`, `ProductNotInCart`,
//!   `InvalidId`, `InvalidBody` → 400
//! - `NotFound`, `RouteNotFound` → 404
//! - `Storage` → 500
//!
//! # Example
//!
//! ```rust,ignore
//! let product = store
//!     .get_by_id(id)
//!     .await
//!     .ok_or(ShopError::NotFound { entity: EntityKind::Product, id })?;
//! ```

use crate::core::entity::EntityKind;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;

/// Result alias used by stores and handlers
pub type ShopResult<T> = Result<T, ShopError>;

/// The error type for the shop API
#[derive(Debug, Error)]
pub enum ShopError {
    /// A required field is absent or empty
    #[error("Missing required field: {field}")]
    MissingField {
        field: &'static str,
        required: &'static [&'static str],
    },

    /// The payload is well-formed JSON but breaks a business rule
    #[error("{0}")]
    Validation(String),

    /// A product code is already used by another product
    #[error("Product code '{code}' already exists")]
    DuplicateCode { code: String },

    /// No entity with this id
    #[error("{entity} with id {id} not found")]
    NotFound { entity: EntityKind, id: u64 },

    /// The cart has no line item for this product
    #[error("Product {product_id} not found in cart {cart_id}")]
    ProductNotInCart { cart_id: u64, product_id: u64 },

    /// A path id that is not a positive integer
    #[error("Invalid {entity} id '{raw}'")]
    InvalidId { entity: EntityKind, raw: String },

    /// The request body is not valid JSON for the endpoint
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No route matched the request
    #[error("Route not found")]
    RouteNotFound,

    /// Reading or writing a collection failed
    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl ShopError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShopError::MissingField { .. }
            | ShopError::Validation(_)
            | ShopError::DuplicateCode { .. }
            | ShopError::ProductNotInCart { .. }
            | ShopError::InvalidId { .. }
            | ShopError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ShopError::NotFound { .. } | ShopError::RouteNotFound => StatusCode::NOT_FOUND,
            ShopError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShopError::MissingField { .. } => "MISSING_FIELD",
            ShopError::Validation(_) => "VALIDATION_ERROR",
            ShopError::DuplicateCode { .. } => "DUPLICATE_CODE",
            ShopError::NotFound { .. } => "NOT_FOUND",
            ShopError::ProductNotInCart { .. } => "PRODUCT_NOT_IN_CART",
            ShopError::InvalidId { .. } => "INVALID_ID",
            ShopError::InvalidBody(_) => "INVALID_BODY",
            ShopError::RouteNotFound => "ROUTE_NOT_FOUND",
            ShopError::Storage(_) => "INTERNAL_ERROR",
        }
    }

    /// Render the JSON error body
    pub fn to_body(&self) -> Value {
        let mut body = json!({
            "error": self.to_string(),
            "code": self.error_code(),
        });

        if let ShopError::MissingField { required, .. } = self {
            body["required"] = json!(required);
        }

        body
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        (status, Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_not_found_returns_404() {
        let err = ShopError::NotFound {
            entity: EntityKind::Cart,
            id: 7,
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Cart with id 7 not found");
    }

    #[test]
    fn test_business_rule_errors_return_400() {
        let errors = [
            ShopError::DuplicateCode {
                code: "ABC".to_string(),
            },
            ShopError::ProductNotInCart {
                cart_id: 1,
                product_id: 2,
            },
            ShopError::Validation("Product id cannot be updated".to_string()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST, "{err}");
        }
    }

    #[test]
    fn test_storage_error_returns_500() {
        let err = ShopError::from(anyhow!("disk full"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_missing_field_body_lists_required_fields() {
        let err = ShopError::MissingField {
            field: "price",
            required: &["title", "price"],
        };
        let body = err.to_body();

        assert_eq!(body["error"], "Missing required field: price");
        assert_eq!(body["code"], "MISSING_FIELD");
        assert_eq!(body["required"], json!(["title", "price"]));
    }

    #[test]
    fn test_invalid_id_message() {
        let err = ShopError::InvalidId {
            entity: EntityKind::Product,
            raw: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid Product id 'abc'");
    }
}
