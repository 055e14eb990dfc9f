//! Cart entity model, line items and request payloads

use crate::core::numeric;
use crate::core::{Entity, EntityKind};
use crate::entities::product::Product;
use serde::{Deserialize, Serialize};

/// Quantity used when an add-to-cart request does not specify one
pub const DEFAULT_QUANTITY: i64 = 1;

/// One product entry in a cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: u64,
    pub quantity: u64,
}

/// A shopping cart
///
/// Holds at most one line item per product id; adding the same product again
/// accumulates its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: u64,
    #[serde(default)]
    pub products: Vec<LineItem>,
}

impl Cart {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            products: Vec::new(),
        }
    }
}

impl Entity for Cart {
    const KIND: EntityKind = EntityKind::Cart;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Payload for `POST /api/carts/{cid}/product/{pid}`; the body is optional
#[derive(Debug, Default, Deserialize)]
pub struct AddToCartRequest {
    #[serde(default, deserialize_with = "numeric::option_i64")]
    pub quantity: Option<i64>,
}

/// Payload for `PUT /api/carts/{cid}/product/{pid}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuantityRequest {
    #[serde(default, deserialize_with = "numeric::option_i64")]
    pub quantity: Option<i64>,
}

/// Line item as returned by `GET /api/carts/{cid}`
///
/// `productData` carries the full product when it still exists in the
/// catalog and is omitted otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub product: u64,
    pub quantity: u64,
    #[serde(rename = "productData", skip_serializing_if = "Option::is_none")]
    pub product_data: Option<Product>,
}

/// Cart with enriched line items
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub id: u64,
    pub products: Vec<CartLineView>,
}

impl CartView {
    /// Attach catalog data to each line item, looking products up in `catalog`
    pub fn enrich(cart: Cart, catalog: &[Product]) -> Self {
        let products = cart
            .products
            .into_iter()
            .map(|item| CartLineView {
                product: item.product,
                quantity: item.quantity,
                product_data: catalog.iter().find(|p| p.id == item.product).cloned(),
            })
            .collect();

        Self {
            id: cart.id,
            products,
        }
    }
}
