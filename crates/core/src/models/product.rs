//! Products.

use serde::{Deserialize, Serialize};

use super::{ValidationError, localized, optional, required};
use crate::types::{CategoryId, Language, Price, ProductId, SubcategoryId};

/// Image used when a product is saved without one.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_ar: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    pub category: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<SubcategoryId>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_origin_ar: Option<String>,
}

impl Product {
    #[must_use]
    pub fn localized_name(&self, language: Language) -> &str {
        localized(language, &self.name, &self.name_ar)
    }

    #[must_use]
    pub fn localized_description(&self, language: Language) -> &str {
        localized(language, &self.description, &self.description_ar)
    }

    /// Country of origin in `language`, if the product has one.
    #[must_use]
    pub fn localized_origin(&self, language: Language) -> Option<&str> {
        match language {
            Language::Ar => self
                .product_origin_ar
                .as_deref()
                .or(self.product_origin.as_deref()),
            Language::En => self.product_origin.as_deref(),
        }
    }

    /// Image path, or the placeholder when none is set.
    #[must_use]
    pub fn image_or_placeholder(&self) -> &str {
        if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }

    /// Merge a partial update. Only fields present in `update` change.
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(name_ar) = update.name_ar {
            self.name_ar = name_ar;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(description_ar) = update.description_ar {
            self.description_ar = description_ar;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(subcategory) = update.subcategory {
            self.subcategory = subcategory;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(origin) = update.product_origin {
            self.product_origin = origin;
        }
        if let Some(origin_ar) = update.product_origin_ar {
            self.product_origin_ar = origin_ar;
        }
    }
}

/// Raw product form input as submitted by the admin panel.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub subcategory: String,
    pub featured: bool,
    pub product_origin: String,
    pub product_origin_ar: String,
}

/// A validated product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    pub price: Price,
    pub image: String,
    pub category: CategoryId,
    pub subcategory: Option<SubcategoryId>,
    pub featured: bool,
    pub product_origin: Option<String>,
    pub product_origin_ar: Option<String>,
}

impl NewProduct {
    /// Validate a create form.
    ///
    /// Name, category and price are required and the price must be a
    /// non-negative number. A blank image becomes [`PLACEHOLDER_IMAGE`] and
    /// a blank subcategory becomes `None`.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(form: &ProductForm) -> Result<Self, ValidationError> {
        let name = required("name", &form.name)?;
        let category = required("category", &form.category)?;
        let price = Price::parse(&form.price)?;

        Ok(Self {
            name,
            name_ar: form.name_ar.trim().to_owned(),
            description: form.description.trim().to_owned(),
            description_ar: form.description_ar.trim().to_owned(),
            price,
            image: optional(&form.image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
            category: CategoryId::new(category),
            subcategory: optional(&form.subcategory).map(SubcategoryId::new),
            featured: form.featured,
            product_origin: optional(&form.product_origin),
            product_origin_ar: optional(&form.product_origin_ar),
        })
    }

    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            name_ar: self.name_ar,
            description: self.description,
            description_ar: self.description_ar,
            price: self.price,
            image: self.image,
            category: self.category,
            subcategory: self.subcategory,
            featured: self.featured,
            product_origin: self.product_origin,
            product_origin_ar: self.product_origin_ar,
        }
    }
}

/// Partial product update.
///
/// `subcategory`, `product_origin` and `product_origin_ar` are doubly
/// optional: `Some(None)` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub price: Option<Price>,
    pub image: Option<String>,
    pub category: Option<CategoryId>,
    pub subcategory: Option<Option<SubcategoryId>>,
    pub featured: Option<bool>,
    pub product_origin: Option<Option<String>>,
    pub product_origin_ar: Option<Option<String>>,
}

impl ProductUpdate {
    /// Validate an edit form.
    ///
    /// Name and category are required. A blank price or image keeps the
    /// stored value; every other field is replaced by the submitted one.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(form: &ProductForm) -> Result<Self, ValidationError> {
        let name = required("name", &form.name)?;
        let category = required("category", &form.category)?;
        let price = if form.price.trim().is_empty() {
            None
        } else {
            Some(Price::parse(&form.price)?)
        };

        Ok(Self {
            name: Some(name),
            name_ar: Some(form.name_ar.trim().to_owned()),
            description: Some(form.description.trim().to_owned()),
            description_ar: Some(form.description_ar.trim().to_owned()),
            price,
            image: optional(&form.image),
            category: Some(CategoryId::new(category)),
            subcategory: Some(optional(&form.subcategory).map(SubcategoryId::new)),
            featured: Some(form.featured),
            product_origin: Some(optional(&form.product_origin)),
            product_origin_ar: Some(optional(&form.product_origin_ar)),
        })
    }
}
