//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

type PeerLayer = GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;
type ProxiedLayer =
    GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Requests per second replenished for public routes.
const PUBLIC_PER_SECOND: u64 = 2;
const PUBLIC_BURST: u32 = 100;

/// Requests per second replenished for authenticated routes.
const SECURE_PER_SECOND: u64 = 1;
const SECURE_BURST: u32 = 30;

/// Creates a rate limiter for public endpoints (short links, health).
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Keys are the
/// socket peer address, so the service must be served with connect info.
pub fn layer() -> PeerLayer {
    GovernorLayer::new(Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PUBLIC_PER_SECOND)
            .burst_size(PUBLIC_BURST)
            .finish()
            .expect("public rate limit configuration is valid"),
    ))
}

/// Creates a stricter rate limiter for authenticated endpoints.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 30 requests
pub fn secure_layer() -> PeerLayer {
    GovernorLayer::new(Arc::new(
        GovernorConfigBuilder::default()
            .per_second(SECURE_PER_SECOND)
            .burst_size(SECURE_BURST)
            .finish()
            .expect("secure rate limit configuration is valid"),
    ))
}

/// Public rate limiter keyed by `X-Forwarded-For` / `X-Real-IP`.
///
/// Use only behind a trusted reverse proxy; clients can set these headers
/// themselves otherwise.
pub fn proxied_layer() -> ProxiedLayer {
    GovernorLayer::new(Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PUBLIC_PER_SECOND)
            .burst_size(PUBLIC_BURST)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("public rate limit configuration is valid"),
    ))
}

/// Authenticated-route rate limiter keyed by forwarded client addresses.
pub fn proxied_secure_layer() -> ProxiedLayer {
    GovernorLayer::new(Arc::new(
        GovernorConfigBuilder::default()
            .per_second(SECURE_PER_SECOND)
            .burst_size(SECURE_BURST)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("secure rate limit configuration is valid"),
    ))
}
