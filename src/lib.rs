//! # shop-api
//!
//! A small REST service managing a product catalog and shopping carts.
//! Each collection is persisted as a JSON document on disk and every write
//! runs as a serialized read-modify-write cycle.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shop::prelude::*;
//!
//! let config = ServerConfig::from_env()?;
//! ServerBuilder::new().with_config(config).serve().await?;
//! ```
//!
//! Routes live under `/api/products` and `/api/carts`; see
//! [`server::router::build_app`] for the service-level routes.

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::config::ServerConfig;
    pub use crate::core::{
        Collection, CollectionStorage, Entity, EntityKind, ShopError, ShopResult, next_id,
    };
    pub use crate::entities::cart::{Cart, CartStore, CartView, LineItem};
    pub use crate::entities::product::{
        CreateProductRequest, Product, ProductStore, UpdateProductRequest,
    };
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};
    pub use crate::storage::{InMemoryStorage, JsonFileStorage};
}
