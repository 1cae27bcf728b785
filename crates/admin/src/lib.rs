//! Hartna admin library.
//!
//! The catalog administration panel. [`app`] builds the complete router so
//! the binary and the tests serve the same stack.
//!
//! # Security
//!
//! A single shared password protects every page except `/login` and the
//! health checks. The listener binds to loopback unless `ADMIN_HOST` says
//! otherwise; put it behind a TLS-terminating proxy before exposing it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Room for the text fields that travel with an uploaded image.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the admin application with its full middleware stack.
pub fn app(state: AppState) -> Router {
    let config = state.config();
    let session_layer = middleware::create_session_layer(config);
    let static_dir = config.static_dir.clone();
    let uploads_dir = config.uploads_dir.clone();
    let body_limit = config.max_upload_bytes.saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .route_service("/placeholder.svg", ServeFile::new(static_dir.join("placeholder.svg")))
        .nest_service("/static", ServeDir::new(static_dir))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(DefaultBodyLimit::max(body_limit))
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
    match state.store().snapshot().await {
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
    use crate::config::AdminConfig;
    use crate::services::hash_password;

    const PASSWORD: &str = "correct horse battery staple";
    const BOUNDARY: &str = "hartna-test-boundary";

    fn test_app() -> (Router, AppState, tempfile::TempDir) {
        test_app_with(|_| {})
    }

    fn test_app_with(
        configure: impl FnOnce(&mut AdminConfig),
    ) -> (Router, AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let hash = hash_password(PASSWORD).unwrap();
        let mut config = AdminConfig::with_data_dir(dir.path(), hash);
        configure(&mut config);
        let state = AppState::new(config);
        (app(state.clone()), state, dir)
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
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

    fn post_multipart(uri: &str, fields: &[(&str, &str)], cookie: &str) -> Request<Body> {
        multipart_request(uri, fields, None, cookie)
    }

    /// Multipart post with an `imageFile` part of the given content type.
    fn post_multipart_image(
        uri: &str,
        fields: &[(&str, &str)],
        image: (&str, &str),
        cookie: &str,
    ) -> Request<Body> {
        multipart_request(uri, fields, Some(image), cookie)
    }

    fn multipart_request(
        uri: &str,
        fields: &[(&str, &str)],
        image: Option<(&str, &str)>,
        cookie: &str,
    ) -> Request<Body> {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        if let Some((content_type, contents)) = image {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"imageFile\"; filename=\"upload\"\r\nContent-Type: {content_type}\r\n\r\n{contents}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::COOKIE, cookie)
            .body(Body::from(body))
            .unwrap()
    }

    fn session_cookie(response: &Response<Body>) -> String {
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_owned()
    }

    async fn login(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(post_form(
                "/login",
                "password=correct+horse+battery+staple",
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        session_cookie(&response)
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _, _dir) = test_app();
        let response = app.oneshot(get("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_login_page_is_public() {
        let (app, _, _dir) = test_app();
        let response = app.oneshot(get("/login", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["cache-control"], "no-store");
        assert!(body_text(response).await.contains(r#"name="password""#));
    }

    #[tokio::test]
    async fn test_pages_redirect_to_login() {
        let (app, _, _dir) = test_app();

        let response = app.clone().oneshot(get("/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");

        let response = app.oneshot(get("/api/messages", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let (app, _, _dir) = test_app();
        let response = app
            .oneshot(post_form("/login", "password=letmein", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_text(response).await.contains("Invalid password"));
    }

    #[tokio::test]
    async fn test_dashboard_after_login() {
        let (app, _, _dir) = test_app();
        let cookie = login(&app).await;

        let response = app.clone().oneshot(get("/", Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Professional Espresso Machine Pro X1"));
        assert!(html.contains("$"));

        let response = app
            .clone()
            .oneshot(post_form("/logout", "", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/login");

        let response = app.oneshot(get("/", Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_category_lifecycle() {
        let (app, state, _dir) = test_app();
        let cookie = login(&app).await;

        let response = app
            .clone()
            .oneshot(post_form(
                "/categories",
                "name=Grinders&nameAr=%D9%85%D8%B7%D8%A7%D8%AD%D9%86",
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/categories?success=saved");

        let categories = state.store().categories().await.unwrap();
        let created = categories.iter().find(|c| c.name == "Grinders").unwrap();
        assert_eq!(created.name_ar, "مطاحن");

        let response = app
            .clone()
            .oneshot(post_form("/categories", "name=&nameAr=", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/categories?error=required");

        let uri = format!("/categories/{}/delete", created.id);
        let response = app
            .clone()
            .oneshot(post_form(&uri, "", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/categories?success=deleted");

        let response = app
            .oneshot(post_form(&uri, "", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/categories?error=not_found");
    }

    #[tokio::test]
    async fn test_product_create_from_multipart() {
        let (app, state, _dir) = test_app();
        let cookie = login(&app).await;

        let response = app
            .clone()
            .oneshot(post_multipart(
                "/products",
                &[
                    ("name", "Milk Frother"),
                    ("description", "Steam wand frother"),
                    ("price", "149.50"),
                    ("category", "coffee-grinder"),
                    ("featured", "on"),
                ],
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/products?success=saved");

        let products = state.store().products().await.unwrap();
        let created = products.iter().find(|p| p.name == "Milk Frother").unwrap();
        assert!(created.featured);

        let response = app
            .oneshot(post_multipart("/products", &[("name", "No price")], &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("banner-error"));
    }

    #[tokio::test]
    async fn test_product_edit_update_and_delete() {
        let (app, state, _dir) = test_app();
        let cookie = login(&app).await;
        let id = hartna_core::ProductId::new("1");
        let before = state.store().product(&id).await.unwrap().unwrap();

        let response = app
            .clone()
            .oneshot(get("/products/1/edit", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Professional Espresso Machine Pro X1"));

        let response = app
            .clone()
            .oneshot(post_multipart(
                "/products/1",
                &[
                    ("name", "Espresso Machine Pro X2"),
                    ("category", "coffee-machines"),
                    ("price", ""),
                ],
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/products?success=saved");
        let after = state.store().product(&id).await.unwrap().unwrap();
        assert_eq!(after.name, "Espresso Machine Pro X2");
        assert_eq!(after.price, before.price);

        let response = app
            .clone()
            .oneshot(post_multipart("/products/1", &[("name", "No category")], &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(get("/products/999/edit", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(post_multipart(
                "/products/999",
                &[("name", "Ghost"), ("category", "coffee-machines")],
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(post_form("/products/1/delete", "", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/products?success=deleted");
        assert_eq!(state.store().product(&id).await.unwrap(), None);

        let response = app
            .oneshot(post_form("/products/1/delete", "", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/products?error=not_found");
    }

    #[tokio::test]
    async fn test_image_upload_limits() {
        let (app, state, dir) = test_app_with(|config| config.max_upload_bytes = 16);
        let cookie = login(&app).await;
        let fields = [
            ("name", "Tamper"),
            ("price", "25"),
            ("category", "accessories"),
        ];
        let count = state.store().products().await.unwrap().len();

        let oversized = "x".repeat(64);
        let response = app
            .clone()
            .oneshot(post_multipart_image(
                "/products",
                &fields,
                ("image/png", &oversized),
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let response = app
            .clone()
            .oneshot(post_multipart_image(
                "/products",
                &fields,
                ("image/svg+xml", "<svg/>"),
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store().products().await.unwrap().len(), count);
        assert!(!dir.path().join("uploads").exists());

        let response = app
            .oneshot(post_multipart_image(
                "/products",
                &fields,
                ("image/png", "PNG"),
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/products?success=saved");

        let products = state.store().products().await.unwrap();
        let created = products.iter().find(|p| p.name == "Tamper").unwrap();
        let name = created.image.strip_prefix("/uploads/").unwrap();
        assert!(name.ends_with(".png"));
        assert_eq!(
            std::fs::read(dir.path().join("uploads").join(name)).unwrap(),
            b"PNG"
        );
    }

    #[tokio::test]
    async fn test_subcategory_lifecycle() {
        let (app, state, _dir) = test_app();
        let cookie = login(&app).await;
        let category_id = hartna_core::CategoryId::new("coffee-grinder");
        let subcategories = |category: hartna_core::Category| category.subcategories;

        let response = app
            .clone()
            .oneshot(post_form(
                "/categories/coffee-grinder/subcategories",
                "name=Manual&nameAr=",
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/categories?success=saved");

        let category = state.store().category(&category_id).await.unwrap().unwrap();
        let created = subcategories(category)
            .into_iter()
            .find(|s| s.name == "Manual")
            .unwrap();

        let uri = format!("/categories/coffee-grinder/subcategories/{}", created.id);
        let response = app
            .clone()
            .oneshot(post_form(&uri, "name=Hand+Grinders&nameAr=", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/categories?success=saved");
        let category = state.store().category(&category_id).await.unwrap().unwrap();
        assert!(subcategories(category).iter().any(|s| s.name == "Hand Grinders"));

        let response = app
            .clone()
            .oneshot(post_form(
                "/categories/no-such-category/subcategories",
                "name=Orphan&nameAr=",
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/categories?error=not_found");

        let delete_uri = format!("{uri}/delete");
        let response = app
            .clone()
            .oneshot(post_form(&delete_uri, "", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/categories?success=deleted");
        let category = state.store().category(&category_id).await.unwrap().unwrap();
        assert!(subcategories(category).iter().all(|s| s.id != created.id));

        let response = app
            .oneshot(post_form(&delete_uri, "", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/categories?error=not_found");
    }

    #[tokio::test]
    async fn test_hero_slide_lifecycle() {
        let (app, state, _dir) = test_app();
        let cookie = login(&app).await;

        let response = app
            .clone()
            .oneshot(post_multipart(
                "/hero-slider",
                &[
                    ("title", "Summer Slush"),
                    ("subtitle", "Cold drinks made easy"),
                    ("image", "/placeholder.svg"),
                    ("link", ""),
                ],
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/hero-slider?success=saved");

        let slides = state.store().hero_slides().await.unwrap();
        let created = slides.iter().find(|s| s.title == "Summer Slush").unwrap();
        assert_eq!(created.link, None);
        assert_eq!(created.cta_link(), "/shop-now");

        let response = app
            .clone()
            .oneshot(post_multipart("/hero-slider", &[("title", "No image")], &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("banner-error"));

        let edit_uri = format!("/hero-slider/{}/edit", created.id);
        let response = app
            .clone()
            .oneshot(get(&edit_uri, Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Summer Slush"));

        let uri = format!("/hero-slider/{}", created.id);
        let response = app
            .clone()
            .oneshot(post_multipart(
                &uri,
                &[
                    ("title", "Winter Espresso"),
                    ("image", "/placeholder.svg"),
                    ("link", "/shop-machines"),
                ],
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/hero-slider?success=saved");
        let updated = state.store().hero_slide(&created.id).await.unwrap().unwrap();
        assert_eq!(updated.title, "Winter Espresso");
        assert_eq!(updated.cta_link(), "/shop-machines");

        let response = app
            .clone()
            .oneshot(get("/hero-slider/slide-missing/edit", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let delete_uri = format!("/hero-slider/{}/delete", created.id);
        let response = app
            .clone()
            .oneshot(post_form(&delete_uri, "", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/hero-slider?success=deleted");
        assert_eq!(state.store().hero_slide(&created.id).await.unwrap(), None);

        let response = app
            .oneshot(post_form(&delete_uri, "", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/hero-slider?error=not_found");
    }

    #[tokio::test]
    async fn test_settings_update_and_reset() {
        let (app, state, _dir) = test_app();
        let cookie = login(&app).await;

        let response = app
            .clone()
            .oneshot(post_form(
                "/settings",
                "siteName=Hartna+Test&email=info%40hartna.example",
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/settings?success=saved");
        assert_eq!(state.store().settings().await.unwrap().site_name, "Hartna Test");

        let response = app
            .clone()
            .oneshot(post_form("/settings", "email=not-an-email", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(post_form("/settings/reset", "", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/settings?success=reset");
        assert_eq!(
            state.store().settings().await.unwrap(),
            hartna_core::SiteSettings::default()
        );
    }

    #[tokio::test]
    async fn test_messages_json_and_delete() {
        let (app, state, _dir) = test_app();
        let cookie = login(&app).await;

        let form = hartna_core::MessageForm {
            first_name: "Lina".to_owned(),
            last_name: "Haddad".to_owned(),
            email: "lina@example.com".to_owned(),
            subject: "Delivery".to_owned(),
            message: "Do you ship to Homs?".to_owned(),
            ..Default::default()
        };
        let message = state
            .store()
            .add_message(hartna_core::NewMessage::validate(&form).unwrap())
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get("/api/messages", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json[0]["subject"], "Delivery");

        let response = app
            .clone()
            .oneshot(get("/messages", Some(&cookie)))
            .await
            .unwrap();
        assert!(body_text(response).await.contains("Lina Haddad"));

        let uri = format!("/messages/{}/delete", message.id);
        let response = app
            .oneshot(post_form(&uri, "", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/messages?success=deleted");
        assert!(state.store().messages().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_language_switch() {
        let (app, _, _dir) = test_app();
        let cookie = login(&app).await;

        let response = app
            .clone()
            .oneshot(post_form(
                "/preferences/language",
                "language=ar&return_to=%2Fsettings",
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/settings");

        let html = body_text(app.oneshot(get("/settings", Some(&cookie))).await.unwrap()).await;
        assert!(html.contains(r#"dir="rtl""#));
    }
}
