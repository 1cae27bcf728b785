//! Hartna storefront library.
//!
//! The public bilingual catalog site. [`app`] builds the complete router so
//! the binary and the tests serve the same stack.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod page;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Build the storefront application with its full middleware stack.
pub fn app(state: AppState) -> Router {
    let config = state.config();
    let session_layer = middleware::create_session_layer(config);
    let static_dir = config.static_dir.clone();
    let uploads_dir = config.uploads_dir.clone();

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .route_service("/placeholder.svg", ServeFile::new(static_dir.join("placeholder.svg")))
        .nest_service("/static", ServeDir::new(static_dir))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the catalog cannot be read.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.catalog().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, Response, header};
    use tower::ServiceExt;

    use super::*;
    use crate::config::StorefrontConfig;

    fn test_app() -> (Router, AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(StorefrontConfig::with_data_dir(dir.path()));
        (app(state.clone()), state, dir)
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_owned())).unwrap()
    }

    fn session_cookie(response: &Response<Body>) -> String {
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_owned()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _, _dir) = test_app();
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_home_renders_defaults() {
        let (app, _, _dir) = test_app();
        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.headers()["x-frame-options"], "DENY");

        let html = body_text(response).await;
        assert!(html.contains("HARTNA COMPANY"));
        assert!(html.contains(r#"dir="ltr""#));
        assert!(html.contains("Professional Espresso Machine Pro X1"));
    }

    #[tokio::test]
    async fn test_slug_resolves_category_then_product() {
        let (app, _, _dir) = test_app();

        let response = app.clone().oneshot(get("/products/slush-machines")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("SPM Slush Frosty Dream"));
        assert!(html.contains("/products/slush-machines/elmec"));

        let response = app.clone().oneshot(get("/products/6")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Espresso Cup Set"));
        assert!(html.contains("Portugal"));

        let response = app.oneshot(get("/products/no-such-thing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_subcategory_listing() {
        let (app, _, _dir) = test_app();

        let response = app
            .clone()
            .oneshot(get("/products/slush-machines/elmec"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("ELMEC Slush Machine FC3"));
        assert!(!html.contains("SPM Slush Frosty Dream"));

        let response = app
            .oneshot(get("/products/slush-machines/unknown"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_path_renders_not_found_page() {
        let (app, _, _dir) = test_app();
        let response = app.oneshot(get("/nowhere")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_json_message_requires_all_fields() {
        let (app, state, _dir) = test_app();

        let request = Request::builder()
            .method("POST")
            .uri("/api/messages")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"firstName":"Lina"}"#))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"], "All fields are required");

        let request = Request::builder()
            .method("POST")
            .uri("/api/messages")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"firstName":"Lina","lastName":"Haddad","email":"lina@example.com","subject":"Delivery","message":"Do you ship to Homs?"}"#,
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["success"], true);

        let messages = state.store().messages().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].subject, "Delivery");
    }

    #[tokio::test]
    async fn test_json_messages_are_rate_limited_per_ip() {
        let (app, state, _dir) = test_app();
        let submit = |ip: &str| {
            Request::builder()
                .method("POST")
                .uri("/api/messages")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-forwarded-for", ip)
                .body(Body::from(
                    r#"{"firstName":"Lina","lastName":"Haddad","email":"lina@example.com","subject":"Delivery","message":"Do you ship to Homs?"}"#,
                ))
                .unwrap()
        };

        for _ in 0..5 {
            let response = app.clone().oneshot(submit("203.0.113.7")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
        let response = app.clone().oneshot(submit("203.0.113.7")).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let response = app.oneshot(submit("198.51.100.4")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.store().messages().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_contact_form_rerenders_with_banner() {
        let (app, state, _dir) = test_app();

        let response = app
            .clone()
            .oneshot(post_form("/contact", "firstName=Lina&email=bad", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_text(response).await;
        assert!(html.contains("banner-error"));
        assert!(html.contains(r#"value="Lina""#));

        let response = app
            .oneshot(post_form(
                "/contact",
                "firstName=Lina&lastName=Haddad&email=lina%40example.com&subject=Hi&message=Hello",
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("banner-success"));
        assert_eq!(state.store().messages().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_cart_lives_in_session() {
        let (app, _, _dir) = test_app();

        let response = app
            .clone()
            .oneshot(post_form("/cart/add", "product_id=6&return_to=%2Fproducts%2F6", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/products/6");
        let cookie = session_cookie(&response);

        let response = app
            .clone()
            .oneshot(post_form("/cart/add", "product_id=6", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/cart");

        let request = Request::builder()
            .uri("/cart")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        let html = body_text(app.clone().oneshot(request).await.unwrap()).await;
        assert!(html.contains("Espresso Cup Set"));
        assert!(html.contains(r#"value="2""#));
        assert!(html.contains("https://wa.me/963992766200"));

        let response = app
            .oneshot(post_form("/cart/add", "product_id=404", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_language_switch_sets_direction() {
        let (app, _, _dir) = test_app();

        let response = app
            .clone()
            .oneshot(post_form(
                "/preferences/language",
                "language=ar&return_to=%2Fabout",
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/about");
        let cookie = session_cookie(&response);

        let request = Request::builder()
            .uri("/about")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        let html = body_text(app.oneshot(request).await.unwrap()).await;
        assert!(html.contains(r#"dir="rtl""#));
        assert!(html.contains(r#"lang="ar""#));
    }

    #[tokio::test]
    async fn test_theme_switch_rejects_unknown_values() {
        let (app, _, _dir) = test_app();
        let response = app
            .oneshot(post_form("/preferences/theme", "theme=sepia", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
