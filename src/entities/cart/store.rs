//! Cart store implementation

use super::model::{Cart, LineItem};
use crate::core::{Collection, CollectionStorage, EntityKind, ShopError, ShopResult, next_id};
use std::sync::Arc;

/// Store owning the cart collection
///
/// The store does not know the product catalog: `add_product` accepts any
/// product id. Checking that the product exists is the caller's job (the
/// add-to-cart route does it before calling in).
#[derive(Clone)]
pub struct CartStore {
    collection: Collection<Cart>,
}

fn find_cart(carts: &mut [Cart], id: u64) -> ShopResult<&mut Cart> {
    carts
        .iter_mut()
        .find(|cart| cart.id == id)
        .ok_or(ShopError::NotFound {
            entity: EntityKind::Cart,
            id,
        })
}

fn line_item_index(cart: &Cart, product_id: u64) -> ShopResult<usize> {
    cart.products
        .iter()
        .position(|item| item.product == product_id)
        .ok_or(ShopError::ProductNotInCart {
            cart_id: cart.id,
            product_id,
        })
}

impl CartStore {
    pub fn new(storage: impl CollectionStorage<Cart> + 'static) -> Self {
        Self::from_storage(Arc::new(storage))
    }

    pub fn from_storage(storage: Arc<dyn CollectionStorage<Cart>>) -> Self {
        Self {
            collection: Collection::new(storage),
        }
    }

    pub async fn list_all(&self) -> Vec<Cart> {
        self.collection.read_all().await
    }

    pub async fn get_by_id(&self, id: u64) -> Option<Cart> {
        self.collection.find(id).await
    }

    /// Create an empty cart with the next id
    pub async fn create(&self) -> ShopResult<Cart> {
        let cart = self
            .collection
            .mutate(|carts| {
                let cart = Cart::new(next_id(carts));
                carts.push(cart.clone());
                Ok(cart)
            })
            .await?;

        tracing::info!(id = cart.id, "cart created");
        Ok(cart)
    }

    /// Add `quantity` units of a product, accumulating onto an existing line item
    pub async fn add_product(&self, cart_id: u64, product_id: u64, quantity: i64) -> ShopResult<Cart> {
        let quantity = u64::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| {
                ShopError::Validation(format!("Quantity must be at least 1, got {quantity}"))
            })?;

        self.collection
            .mutate(move |carts| {
                let cart = find_cart(carts, cart_id)?;

                match cart.products.iter_mut().find(|item| item.product == product_id) {
                    Some(item) => item.quantity = item.quantity.saturating_add(quantity),
                    None => cart.products.push(LineItem {
                        product: product_id,
                        quantity,
                    }),
                }

                tracing::debug!(cart_id, product_id, quantity, "product added to cart");
                Ok(cart.clone())
            })
            .await
    }

    /// Remove the line item for a product
    pub async fn remove_product(&self, cart_id: u64, product_id: u64) -> ShopResult<Cart> {
        self.collection
            .mutate(move |carts| {
                let cart = find_cart(carts, cart_id)?;
                let index = line_item_index(cart, product_id)?;

                cart.products.remove(index);
                Ok(cart.clone())
            })
            .await
    }

    /// Set a line item's quantity; zero or less removes the line item
    pub async fn update_product_quantity(
        &self,
        cart_id: u64,
        product_id: u64,
        quantity: i64,
    ) -> ShopResult<Cart> {
        self.collection
            .mutate(move |carts| {
                let cart = find_cart(carts, cart_id)?;
                let index = line_item_index(cart, product_id)?;

                match u64::try_from(quantity) {
                    Ok(quantity) if quantity > 0 => cart.products[index].quantity = quantity,
                    _ => {
                        cart.products.remove(index);
                    }
                }
                Ok(cart.clone())
            })
            .await
    }

    /// Empty a cart's product list
    pub async fn clear(&self, cart_id: u64) -> ShopResult<Cart> {
        self.collection
            .mutate(move |carts| {
                let cart = find_cart(carts, cart_id)?;
                cart.products.clear();
                Ok(cart.clone())
            })
            .await
    }
}
