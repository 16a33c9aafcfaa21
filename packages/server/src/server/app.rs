//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    get_listing_handler, health_handler, list_listings_handler, mortgage_estimate_handler,
    voice_token_handler, voice_token_preflight,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// Every response carries permissive CORS headers: the site is served from a
/// separate static host and calls this API cross-origin, including the
/// browser voice widget's token fetch.
pub fn build_app(deps: Arc<ServerDeps>) -> Router {
    let app_state = AppState { deps };

    // CORS configuration - allow any origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Listing catalog
        .route("/api/listings", get(list_listings_handler))
        .route("/api/listings/:id", get(get_listing_handler))
        // Mortgage calculator backend
        .route("/api/mortgage/estimate", post(mortgage_estimate_handler))
        // Voice assistant token broker (explicit OPTIONS for bare pre-flights)
        .route(
            "/api/voice/token",
            post(voice_token_handler).options(voice_token_preflight),
        )
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
