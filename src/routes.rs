//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`         - Health check: DB connectivity (public)
//! - `POST /api/v1/login`   - Password login, issues a bearer token (public, strict rate limit)
//! - `/api/v1/*`            - REST API (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - Bearer token with per-endpoint scope checks
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, login_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::layer());

    // Login takes the strict bucket: it is the only endpoint where an
    // attacker can grind passwords.
    let public = Router::new()
        .route("/login", post(login_handler))
        .layer(rate_limit::secure_layer());

    let api_router = Router::new().merge(protected).merge(public);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
