//! Product entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::ProductDescriptor;
pub use handlers::*;
pub use model::{CreateProductRequest, Product, REQUIRED_FIELDS, UpdateProductRequest};
pub use store::ProductStore;
