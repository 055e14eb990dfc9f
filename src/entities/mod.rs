//! Shop entities: each one bundles its model, store, handlers and route
//! descriptor.

pub mod cart;
pub mod product;
