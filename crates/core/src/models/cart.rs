//! Visitor shopping cart.
//!
//! The catalog has no online checkout: the cart is a list the visitor
//! brings to a phone or WhatsApp order.

use serde::{Deserialize, Serialize};

use super::{Product, localized};
use crate::types::{Language, Price, ProductId};

/// A cart line holding a snapshot of the product when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub name_ar: String,
    pub image: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn localized_name(&self, language: Language) -> &str {
        localized(language, &self.name, &self.name_ar)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of `product`, incrementing the line if already present.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }
        self.items.push(CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            name_ar: product.name_ar.clone(),
            image: product.image_or_placeholder().to_owned(),
            price: product.price,
            quantity: 1,
        });
    }

    /// Returns `false` if the product was not in the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() != before
    }

    /// Set a line's quantity. Zero or negative removes the line.
    ///
    /// Returns `false` if the product was not in the cart.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        match self.items.iter_mut().find(|i| &i.product_id == product_id) {
            Some(item) => {
                item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                true
            }
            None => false,
        }
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, i| total.saturating_add(i.quantity))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed;

    fn product(id: &str) -> Product {
        seed::default_products()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    #[test]
    fn test_add_increments_existing_line() {
        let mut cart = Cart::default();
        cart.add_item(&product("1"));
        cart.add_item(&product("1"));
        cart.add_item(&product("6"));
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items().first().unwrap().quantity, 2);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::default();
        cart.add_item(&product("1"));
        assert!(cart.update_quantity(&ProductId::new("1"), 5));
        assert_eq!(cart.total_items(), 5);
        assert!(!cart.update_quantity(&ProductId::new("99"), 2));
    }

    #[test]
    fn test_zero_quantity_removes() {
        let mut cart = Cart::default();
        cart.add_item(&product("1"));
        cart.add_item(&product("6"));
        assert!(cart.update_quantity(&ProductId::new("1"), 0));
        assert_eq!(cart.items().len(), 1);
        assert!(cart.update_quantity(&ProductId::new("6"), -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::default();
        cart.add_item(&product("6"));
        assert!(cart.remove_item(&ProductId::new("6")));
        assert!(!cart.remove_item(&ProductId::new("6")));
        assert_eq!(cart.total_items(), 0);
    }
}
