//! Read-modify-write access to one entity collection

use crate::core::entity::Entity;
use crate::core::error::{ShopError, ShopResult};
use crate::core::service::CollectionStorage;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle over a collection backend
///
/// Reads are lenient: a backend that fails to load (truncated or corrupt
/// file) is treated as an empty collection and logged at `warn`.
///
/// Writes go through [`Collection::mutate`], which holds the collection's write
/// gate for the whole load → modify → save cycle. Concurrent writers to the
/// same collection are therefore serialized and cannot lose each other's
/// updates. Reads never wait on the gate.
pub struct Collection<T: Entity> {
    storage: Arc<dyn CollectionStorage<T>>,
    write_gate: Arc<Mutex<()>>,
}

impl<T: Entity> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            write_gate: self.write_gate.clone(),
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new(storage: Arc<dyn CollectionStorage<T>>) -> Self {
        Self {
            storage,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Load every entity, falling back to an empty collection on failure
    pub async fn read_all(&self) -> Vec<T> {
        match self.storage.load().await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(
                    collection = T::KIND.plural(),
                    storage = %self.storage.describe(),
                    error = %format!("{e:#}"),
                    "failed to load collection, treating it as empty"
                );
                Vec::new()
            }
        }
    }

    /// Find one entity by id
    pub async fn find(&self, id: u64) -> Option<T> {
        self.read_all().await.into_iter().find(|item| item.id() == id)
    }

    /// Apply `op` to the full collection and persist the result
    ///
    /// Unlike reads, the load here is strict: a collection that can't be read
    /// is never overwritten, and the write fails with `ShopError::Storage`.
    /// Nothing is written when `op` fails either, so a rejected operation
    /// leaves the backend untouched.
    pub async fn mutate<R, F>(&self, op: F) -> ShopResult<R>
    where
        F: FnOnce(&mut Vec<T>) -> ShopResult<R> + Send,
        R: Send,
    {
        let _gate = self.write_gate.lock().await;

        let mut items = self.storage.load().await.map_err(|e| {
            tracing::error!(
                collection = T::KIND.plural(),
                storage = %self.storage.describe(),
                error = %format!("{e:#}"),
                "refusing to write over an unreadable collection"
            );
            ShopError::Storage(e)
        })?;
        let outcome = op(&mut items)?;

        self.storage
            .save(&items)
            .await
            .map_err(ShopError::Storage)?;

        tracing::debug!(
            collection = T::KIND.plural(),
            count = items.len(),
            "collection saved"
        );

        Ok(outcome)
    }
}
