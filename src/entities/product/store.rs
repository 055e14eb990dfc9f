//! Product store implementation

use super::model::{CreateProductRequest, Product, UpdateProductRequest};
use crate::core::{Collection, CollectionStorage, EntityKind, ShopError, ShopResult, next_id};
use std::sync::Arc;

/// Store owning the product collection
///
/// Enforces code uniqueness and id assignment on top of a
/// [`CollectionStorage`] backend.
#[derive(Clone)]
pub struct ProductStore {
    collection: Collection<Product>,
}

impl ProductStore {
    pub fn new(storage: impl CollectionStorage<Product> + 'static) -> Self {
        Self::from_storage(Arc::new(storage))
    }

    pub fn from_storage(storage: Arc<dyn CollectionStorage<Product>>) -> Self {
        Self {
            collection: Collection::new(storage),
        }
    }

    /// All products in stored order; empty when the collection can't be read
    pub async fn list_all(&self) -> Vec<Product> {
        self.collection.read_all().await
    }

    pub async fn get_by_id(&self, id: u64) -> Option<Product> {
        self.collection.find(id).await
    }

    /// Validate and append a new product
    pub async fn create(&self, data: CreateProductRequest) -> ShopResult<Product> {
        let mut product = data.into_product()?;

        let created = self
            .collection
            .mutate(move |products| {
                if products.iter().any(|p| p.code == product.code) {
                    return Err(ShopError::DuplicateCode { code: product.code });
                }

                product.id = next_id(products);
                products.push(product.clone());
                Ok(product)
            })
            .await?;

        tracing::info!(id = created.id, code = %created.code, "product created");
        Ok(created)
    }

    /// Merge the present fields of `changes` into product `id`
    pub async fn update(&self, id: u64, changes: UpdateProductRequest) -> ShopResult<Product> {
        let updated = self
            .collection
            .mutate(move |products| {
                let index = products
                    .iter()
                    .position(|p| p.id == id)
                    .ok_or(ShopError::NotFound {
                        entity: EntityKind::Product,
                        id,
                    })?;

                changes.check()?;

                if let Some(code) = &changes.code {
                    if products.iter().any(|p| &p.code == code && p.id != id) {
                        return Err(ShopError::DuplicateCode { code: code.clone() });
                    }
                }

                let product = &mut products[index];
                changes.apply_to(product);
                Ok(product.clone())
            })
            .await?;

        tracing::info!(id, "product updated");
        Ok(updated)
    }

    /// Remove product `id`
    pub async fn delete(&self, id: u64) -> ShopResult<()> {
        self.collection
            .mutate(move |products| {
                let before = products.len();
                products.retain(|p| p.id != id);

                if products.len() == before {
                    return Err(ShopError::NotFound {
                        entity: EntityKind::Product,
                        id,
                    });
                }
                Ok(())
            })
            .await?;

        tracing::info!(id, "product deleted");
        Ok(())
    }
}
