//! Storage trait for entity collections

use crate::core::entity::Entity;
use anyhow::Result;
use async_trait::async_trait;

/// Backend holding one complete collection of entities
///
/// A collection is always read and written as a whole: `load` returns every
/// entity, `save` replaces every entity. Stores build their CRUD semantics on
/// top of this read-modify-write cycle, so the backend stays agnostic to ids,
/// validation and merge rules.
#[async_trait]
pub trait CollectionStorage<T: Entity>: Send + Sync {
    /// Load the full collection
    async fn load(&self) -> Result<Vec<T>>;

    /// Replace the full collection
    async fn save(&self, items: &[T]) -> Result<()>;

    /// Short label for logs (e.g., the file path)
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::EntityKind;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct Widget {
        id: u64,
    }

    impl Entity for Widget {
        const KIND: EntityKind = EntityKind::Product;

        fn id(&self) -> u64 {
            self.id
        }
    }

    struct NullStorage;

    #[async_trait]
    impl CollectionStorage<Widget> for NullStorage {
        async fn load(&self) -> Result<Vec<Widget>> {
            Ok(Vec::new())
        }

        async fn save(&self, _items: &[Widget]) -> Result<()> {
            Ok(())
        }

        fn describe(&self) -> String {
            "null".to_string()
        }
    }

    #[tokio::test]
    async fn test_trait_object_usable() {
        let storage: Box<dyn CollectionStorage<Widget>> = Box::new(NullStorage);
        storage.save(&[Widget { id: 1 }]).await.unwrap();
        assert!(storage.load().await.unwrap().is_empty());
        assert_eq!(storage.describe(), "null");
    }
}
