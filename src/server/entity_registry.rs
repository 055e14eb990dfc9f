//! Entity registry for managing entity descriptors and their route groups

use axum::Router;
use std::collections::BTreeMap;

/// Prefix shared by every entity route group
pub const API_PREFIX: &str = "/api";

/// Trait that describes how to build routes for an entity
///
/// Each entity (product, cart) implements this trait to provide its route
/// group, mounted under [`EntityDescriptor::base_path`].
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "product")
    fn entity_type(&self) -> &str;

    /// The plural form (e.g., "products")
    fn plural(&self) -> &str;

    /// Base path of the route group (e.g., "/api/products")
    fn base_path(&self) -> String {
        format!("{}/{}", API_PREFIX, self.plural())
    }

    /// Build the routes for this entity
    ///
    /// Routes must be absolute (start with [`EntityDescriptor::base_path`])
    /// and carry their own state.
    fn build_routes(&self) -> Router;
}

/// Registry for all entities exposed by the server
///
/// Descriptors are keyed by entity type, so registering the same type twice
/// replaces the earlier descriptor.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register an entity descriptor
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Get all registered entity types, sorted
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Plural name → base path for every registered entity
    ///
    /// Used by the root endpoint to advertise the API.
    pub fn endpoints(&self) -> BTreeMap<String, String> {
        self.descriptors
            .values()
            .map(|d| (d.plural().to_string(), d.base_path()))
            .collect()
    }
}
