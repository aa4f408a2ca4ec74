//! Back office del registro vehicular y cumplimiento normativo
//!
//! El núcleo es el escáner de vencimientos de renovación
//! (services::renewal_scanner); el resto son las superficies CRUD del
//! portal que lo rodean.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware as axum_middleware, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::auth::auth_middleware;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Construye el router completo de la aplicación
pub fn build_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&state.config.cors_origins)
    };

    let protected = Router::new()
        .nest("/api/auth", routes::auth_routes::create_profile_router())
        .nest(
            "/api/vehicles",
            routes::vehicle_routes::create_vehicle_router()
                .merge(routes::document_routes::create_document_router()),
        )
        .nest("/api/renewals", routes::renewal_routes::create_renewal_router())
        .nest(
            "/api/orders",
            routes::service_order_routes::create_service_order_router(),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "rto-backoffice",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
