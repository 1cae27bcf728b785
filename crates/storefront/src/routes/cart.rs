//! Cart route handlers.
//!
//! The cart lives in the visitor session. There is no checkout: the cart
//! page lists the chosen products and tells the visitor how to order by
//! phone or WhatsApp.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use hartna_core::{CartItem, I18n, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::Preferences;
use crate::page::{Layout, Page, load_cart, save_cart};
use crate::routes::preferences::safe_return_to;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub product_id: String,
    pub href: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub quantity_label: String,
}

impl CartLineView {
    fn new(item: &CartItem, i18n: I18n) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            href: format!("/products/{}", item.product_id),
            name: item.localized_name(i18n.language()).to_owned(),
            image: item.image.clone(),
            quantity: item.quantity,
            quantity_label: i18n.digits(&item.quantity.to_string()),
        }
    }
}

/// How the visitor reaches the shop to place an order.
#[derive(Debug, Clone)]
pub struct OrderContact {
    /// `tel:` link target.
    pub tel: String,
    /// Number as displayed.
    pub display: String,
    pub whatsapp_url: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub lines: Vec<CartLineView>,
    pub total_label: String,
    pub contact: OrderContact,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
    pub label: String,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Display the cart page.
#[instrument(skip(state, page))]
pub async fn show(State(state): State<AppState>, page: Page) -> impl IntoResponse {
    let i18n = page.i18n();
    let config = state.config();

    CartShowTemplate {
        i18n,
        layout: page.layout(),
        lines: page
            .cart
            .items()
            .iter()
            .map(|item| CartLineView::new(item, i18n))
            .collect(),
        total_label: i18n.digits(&page.cart.total_items().to_string()),
        contact: OrderContact {
            tel: config.contact_tel(),
            display: i18n.digits(&config.contact_number),
            whatsapp_url: config.whatsapp_url(),
        },
    }
}

/// Add one unit of a product to the cart.
///
/// # Errors
///
/// Returns 404 if the product does not exist.
#[instrument(skip(page))]
pub async fn add(page: Page, Form(form): Form<AddToCartForm>) -> Result<Redirect> {
    let product = page
        .catalog
        .product(&ProductId::new(form.product_id.as_str()))
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let mut cart = page.cart;
    cart.add_item(product);
    save_cart(&page.session, &cart).await?;
    add_breadcrumb("cart", &format!("Added product {}", product.id));

    Ok(Redirect::to(safe_return_to(
        form.return_to.as_deref(),
        "/cart",
    )))
}

/// Change a cart line's quantity; zero or less removes it.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let mut cart = load_cart(&session).await;
    if cart.update_quantity(&ProductId::new(form.product_id), form.quantity) {
        save_cart(&session, &cart).await?;
    }
    Ok(Redirect::to("/cart"))
}

/// Remove a cart line.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    let mut cart = load_cart(&session).await;
    if cart.remove_item(&ProductId::new(form.product_id)) {
        save_cart(&session, &cart).await?;
    }
    Ok(Redirect::to("/cart"))
}

/// Cart count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let count = load_cart(&session).await.total_items();
    let i18n = Preferences::load(&session).await.i18n();

    CartCountTemplate {
        count,
        label: i18n.digits(&count.to_string()),
    }
}
