//! In-memory implementation of CollectionStorage for testing and development

use crate::core::{CollectionStorage, Entity};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory collection storage
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Clones share the same underlying collection.
#[derive(Clone)]
pub struct InMemoryStorage<T: Entity> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T: Entity> InMemoryStorage<T> {
    /// Create an empty in-memory collection
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create an in-memory collection seeded with `items`
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

impl<T: Entity> Default for InMemoryStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> CollectionStorage<T> for InMemoryStorage<T> {
    async fn load(&self) -> Result<Vec<T>> {
        let items = self
            .items
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(items.clone())
    }

    async fn save(&self, new_items: &[T]) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        *items = new_items.to_vec();

        Ok(())
    }

    fn describe(&self) -> String {
        format!("in-memory {}", T::KIND.plural())
    }
}
