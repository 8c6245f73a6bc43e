//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /s/{code}`  - Short link redirect (public)
//! - `GET  /health`    - Health check (public)
//! - `/api/*`          - Recipe API; cart and favorites require a Bearer token
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (proxy-aware when configured)
//! - **Authentication** - Bearer token on protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, short_link_redirect_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let public = Router::new()
        .route("/s/{code}", get(short_link_redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::public_routes());

    let (protected, public) = if behind_proxy {
        (
            protected.layer(rate_limit::proxied_secure_layer()),
            public.layer(rate_limit::proxied_layer()),
        )
    } else {
        (
            protected.layer(rate_limit::secure_layer()),
            public.layer(rate_limit::layer()),
        )
    };

    let router = Router::new()
        .nest("/api", protected)
        .merge(public)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
