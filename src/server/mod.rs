//! HTTP server: entity route registry, request extractors, router assembly
//! and the `ServerBuilder` that wires them to storage.

pub mod builder;
pub mod entity_registry;
pub mod extract;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{API_PREFIX, EntityDescriptor, EntityRegistry};
pub use router::build_app;
