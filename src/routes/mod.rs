//! HTTP route handlers.
//!
//! Routes are grouped by cacheability: static assets get a short public
//! Cache-Control, while health and stats responses are never stored.
//!
//! Request tracing is enabled via middleware that assigns a request ID to
//! each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod stats;

use axum::{
    http::header::{HeaderValue, CACHE_CONTROL},
    middleware,
    routing::{get, get_service},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_NO_STORE, CACHE_CONTROL_STATIC};
use crate::error::AppError;
use crate::http::cors::cors_layer;
use crate::http::static_files::{
    create_asset_service, create_static_service, INDEX_FILE, SCRIPT_FILE, STYLE_FILE,
};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Fallback for paths that match no route.
async fn not_found() -> AppError {
    AppError::NotFound
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let assets = &state.config.assets;

    // Page shell and asset directory - short public cache
    let static_routes = Router::new()
        .route("/", get_service(create_asset_service(assets, INDEX_FILE)))
        .route(
            "/style.css",
            get_service(create_asset_service(assets, STYLE_FILE)),
        )
        .route(
            "/script.js",
            get_service(create_asset_service(assets, SCRIPT_FILE)),
        )
        .nest_service("/static", create_static_service(assets))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    // Health and stats - always fresh
    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/api/stats", get(stats::backend_stats))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(static_routes)
        .merge(api_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
