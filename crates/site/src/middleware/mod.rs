//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, trace transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with in-memory store)
//! 4. Security headers (CSP, isolation, caching policy)

pub mod security_headers;
pub mod session;

pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
