//! Read-side catalog queries.

use serde::{Deserialize, Serialize};

use super::{Category, HeroSlide, Product, SiteSettings, Subcategory};
use crate::types::{CategoryId, Language, Price, ProductId, SubcategoryId};

/// Number of related products shown on a product page.
pub const RELATED_LIMIT: usize = 4;

/// A point-in-time copy of every catalog collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub hero_slides: Vec<HeroSlide>,
    pub settings: SiteSettings,
}

impl Catalog {
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    #[must_use]
    pub fn subcategory(&self, category: &CategoryId, id: &SubcategoryId) -> Option<&Subcategory> {
        self.category(category)?.subcategory(id)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    pub fn in_category<'a>(&'a self, category: &'a CategoryId) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| &p.category == category)
    }

    pub fn in_subcategory<'a>(
        &'a self,
        category: &'a CategoryId,
        subcategory: &'a SubcategoryId,
    ) -> impl Iterator<Item = &'a Product> {
        self.in_category(category)
            .filter(move |p| p.subcategory.as_ref() == Some(subcategory))
    }

    /// Up to `limit` other products from the same category, in stored order.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Products whose English name or description contains `query`,
    /// ignoring case. A blank query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Sum of every product's price.
    #[must_use]
    pub fn catalog_value(&self) -> Price {
        self.products.iter().map(|p| p.price).sum()
    }

    /// The first `n` products in stored order.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[Product] {
        self.products.get(..n).unwrap_or(&self.products)
    }

    /// Display name of a category, or a humanized id when it no longer exists.
    #[must_use]
    pub fn category_name(&self, id: &CategoryId, language: Language) -> String {
        self.category(id).map_or_else(
            || humanize(id.as_str()),
            |c| c.localized_name(language).to_owned(),
        )
    }

    /// Display name of a subcategory, or a humanized id when it no longer exists.
    #[must_use]
    pub fn subcategory_name(
        &self,
        category: &CategoryId,
        id: &SubcategoryId,
        language: Language,
    ) -> String {
        self.subcategory(category, id).map_or_else(
            || humanize(id.as_str()),
            |s| s.localized_name(language).to_owned(),
        )
    }
}

fn humanize(id: &str) -> String {
    id.replace('-', " ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed;

    fn catalog() -> Catalog {
        Catalog {
            products: seed::default_products(),
            categories: seed::default_categories(),
            hero_slides: seed::default_hero_slides(),
            settings: SiteSettings::default(),
        }
    }

    #[test]
    fn test_featured() {
        let catalog = catalog();
        let ids: Vec<_> = catalog.featured().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "7", "15"]);
    }

    #[test]
    fn test_in_subcategory() {
        let catalog = catalog();
        let slush = CategoryId::new("slush-machines");
        let elmec = SubcategoryId::new("elmec");
        assert_eq!(catalog.in_category(&slush).count(), 3);
        assert_eq!(catalog.in_subcategory(&slush, &elmec).count(), 2);
    }

    #[test]
    fn test_related_excludes_self_and_limits() {
        let catalog = catalog();
        let product = catalog.product(&ProductId::new("1")).unwrap();
        let related = catalog.related(product, RELATED_LIMIT);
        assert_eq!(related.len(), 2);
        assert!(related.iter().all(|p| p.id != product.id));
        assert!(related.iter().all(|p| p.category == product.category));

        let accessory = catalog.product(&ProductId::new("4")).unwrap();
        assert_eq!(catalog.related(accessory, 1).len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let hits = catalog.search("ELMEC");
        assert_eq!(hits.len(), 2);
        let by_description = catalog.search("turkish coffee");
        assert_eq!(by_description.len(), 1);
        assert_eq!(catalog.search("  ").len(), catalog.products.len());
    }

    #[test]
    fn test_catalog_value_and_recent() {
        let catalog = catalog();
        assert_eq!(catalog.catalog_value(), Price::from_units(22_966));
        assert_eq!(catalog.recent(5).len(), 5);
        assert_eq!(catalog.recent(100).len(), catalog.products.len());
    }

    #[test]
    fn test_names_fall_back_to_humanized_id() {
        let catalog = catalog();
        let cat = CategoryId::new("coffee-machines");
        assert_eq!(catalog.category_name(&cat, Language::Ar), "آلات القهوة");
        assert_eq!(
            catalog.category_name(&CategoryId::new("old-stock"), Language::En),
            "old stock"
        );
        assert_eq!(
            catalog.subcategory_name(&cat, &SubcategoryId::new("vending-machines"), Language::En),
            "Vending Machines"
        );
    }
}
