//! Cart entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::CartDescriptor;
pub use handlers::*;
pub use model::{
    AddToCartRequest, Cart, CartLineView, CartView, DEFAULT_QUANTITY, LineItem,
    UpdateQuantityRequest,
};
pub use store::CartStore;
