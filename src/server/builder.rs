//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::router::build_app;
use crate::config::ServerConfig;
use crate::core::CollectionStorage;
use crate::entities::cart::{Cart, CartDescriptor, CartStore};
use crate::entities::product::{Product, ProductDescriptor, ProductStore};
use crate::storage::JsonFileStorage;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder wiring the stores, the entity routes and the listener
///
/// Storage defaults to JSON collection files under the configured data
/// directory; either collection can be swapped for another backend.
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(ServerConfig::from_env()?)
///     .serve()
///     .await?;
/// ```
#[derive(Default)]
pub struct ServerBuilder {
    config: ServerConfig,
    product_storage: Option<Arc<dyn CollectionStorage<Product>>>,
    cart_storage: Option<Arc<dyn CollectionStorage<Cart>>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Back the product collection with a specific storage
    pub fn with_product_storage(mut self, storage: impl CollectionStorage<Product> + 'static) -> Self {
        self.product_storage = Some(Arc::new(storage));
        self
    }

    /// Back the cart collection with a specific storage
    pub fn with_cart_storage(mut self, storage: impl CollectionStorage<Cart> + 'static) -> Self {
        self.cart_storage = Some(Arc::new(storage));
        self
    }

    /// Build the stores and the entity registry
    pub fn build_registry(&self) -> EntityRegistry {
        let product_storage: Arc<dyn CollectionStorage<Product>> =
            match self.product_storage.clone() {
                Some(storage) => storage,
                None => Arc::new(JsonFileStorage::new(self.config.products_path())),
            };
        let cart_storage: Arc<dyn CollectionStorage<Cart>> = match self.cart_storage.clone() {
            Some(storage) => storage,
            None => Arc::new(JsonFileStorage::new(self.config.carts_path())),
        };

        tracing::debug!(
            products = %product_storage.describe(),
            carts = %cart_storage.describe(),
            "collection storage selected"
        );

        let products = ProductStore::from_storage(product_storage);
        let carts = CartStore::from_storage(cart_storage);

        let mut registry = EntityRegistry::new();
        registry.register(Box::new(ProductDescriptor::new(products.clone())));
        registry.register(Box::new(CartDescriptor::new(carts, products)));
        registry
    }

    /// Build the final router
    pub fn build(&self) -> Router {
        build_app(&self.build_registry())
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds `host:port` from the configuration and handles SIGTERM and
    /// SIGINT (Ctrl+C) for graceful shutdown.
    pub async fn serve(self) -> Result<()> {
        let app = self.build();
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);
        tracing::info!(
            "Data files: {} and {}",
            self.config.products_path().display(),
            self.config.carts_path().display()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Wait for SIGTERM or SIGINT
///
/// If a handler cannot be installed, that signal is never delivered and the
/// other one still triggers shutdown.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
