//! Entity descriptor for Cart

use super::handlers::{
    CartAppState, add_product_to_cart, clear_cart, create_cart, get_cart, list_carts,
    remove_product_from_cart, update_cart_product_quantity,
};
use super::store::CartStore;
use crate::core::EntityKind;
use crate::entities::product::ProductStore;
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{get, post},
};

/// Descriptor for the Cart entity
pub struct CartDescriptor {
    pub carts: CartStore,
    pub products: ProductStore,
}

impl CartDescriptor {
    pub fn new(carts: CartStore, products: ProductStore) -> Self {
        Self { carts, products }
    }
}

impl EntityDescriptor for CartDescriptor {
    fn entity_type(&self) -> &str {
        EntityKind::Cart.singular()
    }

    fn plural(&self) -> &str {
        EntityKind::Cart.plural()
    }

    fn build_routes(&self) -> Router {
        let state = CartAppState {
            carts: self.carts.clone(),
            products: self.products.clone(),
        };
        let base = self.base_path();

        Router::new()
            .route(&base, get(list_carts).post(create_cart))
            .route(&format!("{base}/{{cid}}"), get(get_cart).delete(clear_cart))
            .route(
                &format!("{base}/{{cid}}/product/{{pid}}"),
                post(add_product_to_cart)
                    .put(update_cart_product_quantity)
                    .delete(remove_product_from_cart),
            )
            .with_state(state)
    }
}
