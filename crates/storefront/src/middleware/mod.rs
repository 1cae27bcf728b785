//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (record `x-request-id` in the span and response)
//! 4. Security headers (CSP, frame and sniffing protection)
//! 5. Session layer (tower-sessions, in-memory store)
//! 6. Rate limiting (governor, contact submissions only)

pub mod preferences;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use preferences::{Preferences, set_language, set_theme};
pub use rate_limit::contact_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
