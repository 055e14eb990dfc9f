//! Entity traits defining the core abstraction for persisted collections

use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

/// The kinds of entity the service persists.
///
/// Each kind owns one collection file, and the kind's collection field is the
/// name of the array inside that document (`{ "products": [...] }`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Product,
    Cart,
}

impl EntityKind {
    /// Singular resource name (e.g., "product")
    pub fn singular(self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Cart => "cart",
        }
    }

    /// Plural resource name, also the collection field in the JSON document
    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Product => "products",
            EntityKind::Cart => "carts",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Product => write!(f, "Product"),
            EntityKind::Cart => write!(f, "Cart"),
        }
    }
}

/// Base trait for all entities stored in a collection.
///
/// Entities are identified by a positive integer assigned by the store on
/// creation. Ids are never taken from client input.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The kind of this entity, which also names its collection
    const KIND: EntityKind;

    /// Get the identifier of this entity instance
    fn id(&self) -> u64;
}

/// Next id for a collection: the largest existing id plus one, or 1 when empty.
pub fn next_id<T: Entity>(items: &[T]) -> u64 {
    items.iter().map(Entity::id).max().map_or(1, |max| max + 1)
}
