//! Entity descriptor for Product

use super::handlers::{
    ProductAppState, create_product, delete_product, get_product, list_products, update_product,
};
use super::store::ProductStore;
use crate::core::EntityKind;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Product entity
pub struct ProductDescriptor {
    pub store: ProductStore,
}

impl ProductDescriptor {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for ProductDescriptor {
    fn entity_type(&self) -> &str {
        EntityKind::Product.singular()
    }

    fn plural(&self) -> &str {
        EntityKind::Product.plural()
    }

    fn build_routes(&self) -> Router {
        let state = ProductAppState {
            store: self.store.clone(),
        };
        let base = self.base_path();

        Router::new()
            .route(&base, get(list_products).post(create_product))
            .route(
                &format!("{base}/{{pid}}"),
                get(get_product).put(update_product).delete(delete_product),
            )
            .with_state(state)
    }
}
