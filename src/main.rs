//! shop-api binary
//!
//! Reads its configuration from the environment (see [`ServerConfig`]) and
//! serves the products and carts API until SIGINT or SIGTERM.

use anyhow::Result;
use shop::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;

    println!("🚀 Starting shop-api v{}", env!("CARGO_PKG_VERSION"));
    println!("\n🌐 Server running on http://{}", config.bind_addr());
    println!("\n📚 Routes:");
    println!("    GET    /api/products                      - List all products");
    println!("    POST   /api/products                      - Create a product");
    println!("    GET    /api/products/{{pid}}                - Get a product");
    println!("    PUT    /api/products/{{pid}}                - Update a product");
    println!("    DELETE /api/products/{{pid}}                - Delete a product");
    println!("    GET    /api/carts                         - List all carts");
    println!("    POST   /api/carts                         - Create a cart");
    println!("    GET    /api/carts/{{cid}}                   - Get a cart with product data");
    println!("    DELETE /api/carts/{{cid}}                   - Empty a cart");
    println!("    POST   /api/carts/{{cid}}/product/{{pid}}     - Add a product to a cart");
    println!("    PUT    /api/carts/{{cid}}/product/{{pid}}     - Set a line item quantity");
    println!("    DELETE /api/carts/{{cid}}/product/{{pid}}     - Remove a product from a cart");

    ServerBuilder::new().with_config(config).serve().await
}
