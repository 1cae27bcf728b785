//! Per-request page context and template view models.
//!
//! Handlers take a [`Page`] extractor, which gathers everything the shared
//! layout needs (visitor preferences, catalog snapshot, cart) in one place.
//! View models carry strings already localized for the visitor, so
//! templates only print fields.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hartna_core::{
    Cart, Catalog, CategoryId, HeroSlide, I18n, Language, Product, SubcategoryId, Theme,
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::Preferences;
use crate::middleware::session::session_keys;
use crate::state::AppState;

/// Everything a page handler needs about the current visitor.
pub struct Page {
    pub prefs: Preferences,
    pub catalog: Arc<Catalog>,
    pub cart: Cart,
    pub session: Session,
    pub path: String,
}

impl Page {
    #[must_use]
    pub const fn i18n(&self) -> I18n {
        self.prefs.i18n()
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.prefs.language
    }

    /// Shared header/footer data.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::new(self.prefs, &self.catalog, &self.cart, &self.path)
    }

    #[must_use]
    pub fn cards<'a>(&self, products: impl IntoIterator<Item = &'a Product>) -> Vec<ProductCard> {
        products
            .into_iter()
            .map(|p| ProductCard::new(p, self.language()))
            .collect()
    }
}

impl FromRequestParts<AppState> for Page {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| AppError::Internal(message.to_string()))?;
        let prefs = Preferences::load(&session).await;
        let cart = load_cart(&session).await;
        let catalog = state.catalog().await?;
        let path = parts
            .uri
            .path_and_query()
            .map_or("/", |pq| pq.as_str())
            .to_owned();

        Ok(Self {
            prefs,
            catalog,
            cart,
            session,
            path,
        })
    }
}

/// Read the visitor's cart; a missing or unreadable cart is empty.
pub async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the visitor's cart.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, cart).await
}

/// Header and footer content shared by every page.
#[derive(Debug, Clone)]
pub struct Layout {
    pub i18n: I18n,
    pub theme: Theme,
    pub theme_class: &'static str,
    pub site_name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub social: Vec<SocialLink>,
    pub nav: Vec<NavCategory>,
    pub cart_count: u32,
    pub cart_count_label: String,
    /// Path of the current page, used as the redirect target of the
    /// language and theme switches.
    pub return_to: String,
    pub other_language_code: &'static str,
    pub other_language_name: &'static str,
}

impl Layout {
    #[must_use]
    pub fn new(prefs: Preferences, catalog: &Catalog, cart: &Cart, path: &str) -> Self {
        let i18n = prefs.i18n();
        let language = prefs.language;
        let settings = &catalog.settings;
        let cart_count = cart.total_items();

        Self {
            i18n,
            theme: prefs.theme,
            theme_class: prefs.theme.resolved_class(),
            site_name: settings.localized_site_name(language).to_owned(),
            tagline: settings.localized_tagline(language).to_owned(),
            phone: i18n.digits(&settings.phone),
            email: settings.email.clone(),
            address: settings.address.clone(),
            social: settings
                .social_links()
                .into_iter()
                .map(|(network, url)| SocialLink {
                    network,
                    url: url.to_owned(),
                })
                .collect(),
            nav: catalog
                .categories
                .iter()
                .map(|c| NavCategory {
                    href: format!("/products/{}", c.id),
                    name: c.localized_name(language).to_owned(),
                    subcategories: c
                        .subcategories
                        .iter()
                        .map(|s| NavLink {
                            href: format!("/products/{}/{}", c.id, s.id),
                            name: s.localized_name(language).to_owned(),
                        })
                        .collect(),
                })
                .collect(),
            cart_count,
            cart_count_label: i18n.digits(&cart_count.to_string()),
            return_to: path.to_owned(),
            other_language_code: language.other().code(),
            other_language_name: language.other().native_name(),
        }
    }

    /// Whether `theme` is the visitor's current choice.
    #[must_use]
    pub fn is_theme(&self, theme: &str) -> bool {
        self.theme.as_str() == theme
    }
}

#[derive(Debug, Clone)]
pub struct SocialLink {
    pub network: &'static str,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: String,
    pub name: String,
}

/// A top-level category in the navigation menu.
#[derive(Debug, Clone)]
pub struct NavCategory {
    pub href: String,
    pub name: String,
    pub subcategories: Vec<NavLink>,
}

/// A product tile in a listing.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub href: String,
    pub name: String,
    pub description: String,
    pub image: String,
}

impl ProductCard {
    #[must_use]
    pub fn new(product: &Product, language: Language) -> Self {
        Self {
            href: format!("/products/{}", product.id),
            name: product.localized_name(language).to_owned(),
            description: product.localized_description(language).to_owned(),
            image: product.image_or_placeholder().to_owned(),
        }
    }
}

/// A hero slider slide.
#[derive(Debug, Clone)]
pub struct SlideView {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub href: String,
    pub image: String,
}

impl SlideView {
    #[must_use]
    pub fn new(slide: &HeroSlide, language: Language) -> Self {
        let image = if slide.image.trim().is_empty() {
            hartna_core::PLACEHOLDER_IMAGE.to_owned()
        } else {
            slide.image.clone()
        };
        Self {
            title: slide.localized_title(language).to_owned(),
            subtitle: slide.localized_subtitle(language).to_owned(),
            cta: slide.localized_cta(language).to_owned(),
            href: slide.cta_link().to_owned(),
            image,
        }
    }
}

/// Heading and links for a category or subcategory listing.
#[derive(Debug, Clone)]
pub struct ListingHeader {
    pub title: String,
    pub category_href: String,
    pub category_name: String,
    pub subcategories: Vec<NavLink>,
}

impl ListingHeader {
    #[must_use]
    pub fn for_category(catalog: &Catalog, category: &CategoryId, language: Language) -> Self {
        let category_name = catalog.category_name(category, language);
        let subcategories = catalog
            .category(category)
            .map(|c| {
                c.subcategories
                    .iter()
                    .map(|s| NavLink {
                        href: format!("/products/{}/{}", c.id, s.id),
                        name: s.localized_name(language).to_owned(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: category_name.clone(),
            category_href: format!("/products/{category}"),
            category_name,
            subcategories,
        }
    }

    #[must_use]
    pub fn for_subcategory(
        catalog: &Catalog,
        category: &CategoryId,
        subcategory: &SubcategoryId,
        language: Language,
    ) -> Self {
        Self {
            title: catalog.subcategory_name(category, subcategory, language),
            ..Self::for_category(catalog, category, language)
        }
    }
}

#[cfg(test)]
mod tests {
    use hartna_core::{SiteSettings, seed};

    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            products: seed::default_products(),
            categories: seed::default_categories(),
            hero_slides: seed::default_hero_slides(),
            settings: SiteSettings::default(),
        }
    }

    #[test]
    fn test_layout_localizes_chrome() {
        let prefs = Preferences {
            language: Language::Ar,
            theme: Theme::Dark,
        };
        let layout = Layout::new(prefs, &catalog(), &Cart::default(), "/about");
        assert_eq!(layout.site_name, "شركة هارتنا");
        assert_eq!(layout.phone, "٠٠٩٦٣٤١٢٥٥٤٨٩٩");
        assert_eq!(layout.theme_class, "dark");
        assert_eq!(layout.other_language_code, "en");
        assert_eq!(layout.nav.len(), 6);
        assert!(layout.is_theme("dark"));
    }

    #[test]
    fn test_listing_header_for_subcategory() {
        let header = ListingHeader::for_subcategory(
            &catalog(),
            &CategoryId::new("slush-machines"),
            &SubcategoryId::new("elmec"),
            Language::En,
        );
        assert_eq!(header.title, "ELMEC");
        assert_eq!(header.category_href, "/products/slush-machines");
        assert_eq!(header.subcategories.len(), 2);
    }
}
