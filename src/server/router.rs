//! Top-level router: service routes, entity routes, fallback and layers

use super::entity_registry::EntityRegistry;
use crate::core::ShopError;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const SERVICE_NAME: &str = "shop-api";

/// Assemble the application router from the registered entities
///
/// Produces:
/// - `GET /` listing the entity endpoints
/// - `GET /health`
/// - the CRUD routes of every registered entity
/// - a JSON 404 for anything else, including a known path hit with an
///   unsupported method
pub fn build_app(registry: &EntityRegistry) -> Router {
    let info = json!({
        "message": "Shop API",
        "endpoints": registry.endpoints(),
    });

    Router::new()
        .route("/", get(move || async move { Json(info) }))
        .route("/health", get(health_check))
        .merge(registry.build_routes())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
}

/// Permissive CORS: any origin, method and header
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

async fn route_not_found() -> ShopError {
    ShopError::RouteNotFound
}
