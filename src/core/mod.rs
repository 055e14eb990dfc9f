//! Core module containing fundamental traits and types for the service

pub mod entity;
pub mod error;
pub mod numeric;
pub mod service;
pub mod store;

pub use entity::{Entity, EntityKind, next_id};
pub use error::{ShopError, ShopResult};
pub use service::CollectionStorage;
pub use store::Collection;
