//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (record `x-request-id` in the span and response)
//! 4. Security headers (strict CSP, no framing, no caching of pages)
//! 5. Session layer (tower-sessions, in-memory, SameSite=Strict)
//! 6. Rate limiting (governor, `POST /login` only)
//!
//! Authentication is enforced per handler by the [`RequireAdminAuth`]
//! extractor rather than by a layer.

pub mod auth;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{OptionalAdminAuth, RequireAdminAuth, sign_in, sign_out};
pub use rate_limit::login_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
