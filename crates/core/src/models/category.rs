//! Categories and subcategories.

use serde::{Deserialize, Serialize};

use super::{ValidationError, localized, required};
use crate::types::{CategoryId, Language, SubcategoryId};

/// A subcategory nested under a [`Category`].
///
/// Subcategory ids are only unique within their parent category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub name: String,
    #[serde(default)]
    pub name_ar: String,
}

impl Subcategory {
    #[must_use]
    pub fn new(id: SubcategoryId, names: LocalizedName) -> Self {
        Self {
            id,
            name: names.name,
            name_ar: names.name_ar,
        }
    }

    #[must_use]
    pub fn localized_name(&self, language: Language) -> &str {
        localized(language, &self.name, &self.name_ar)
    }

    pub fn apply(&mut self, update: CategoryUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(name_ar) = update.name_ar {
            self.name_ar = name_ar;
        }
    }
}

/// A top-level product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// A new category with no subcategories.
    #[must_use]
    pub fn new(id: CategoryId, names: LocalizedName) -> Self {
        Self {
            id,
            name: names.name,
            name_ar: names.name_ar,
            subcategories: Vec::new(),
        }
    }

    #[must_use]
    pub fn localized_name(&self, language: Language) -> &str {
        localized(language, &self.name, &self.name_ar)
    }

    #[must_use]
    pub fn subcategory(&self, id: &SubcategoryId) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| &s.id == id)
    }

    /// Merge new names; subcategories are left alone.
    pub fn apply(&mut self, update: CategoryUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(name_ar) = update.name_ar {
            self.name_ar = name_ar;
        }
    }

    pub fn add_subcategory(&mut self, subcategory: Subcategory) {
        self.subcategories.push(subcategory);
    }

    /// Returns `false` if no subcategory has that id.
    pub fn update_subcategory(&mut self, id: &SubcategoryId, update: CategoryUpdate) -> bool {
        match self.subcategories.iter_mut().find(|s| &s.id == id) {
            Some(subcategory) => {
                subcategory.apply(update);
                true
            }
            None => false,
        }
    }

    /// Returns `false` if no subcategory has that id.
    pub fn remove_subcategory(&mut self, id: &SubcategoryId) -> bool {
        let before = self.subcategories.len();
        self.subcategories.retain(|s| &s.id != id);
        self.subcategories.len() != before
    }
}

/// Raw name form input for categories and subcategories.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryForm {
    pub name: String,
    pub name_ar: String,
}

/// A validated English/Arabic name pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedName {
    pub name: String,
    pub name_ar: String,
}

impl LocalizedName {
    /// The English name is required; the Arabic one may be blank.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] if the English name is blank.
    pub fn validate(form: &CategoryForm) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", &form.name)?,
            name_ar: form.name_ar.trim().to_owned(),
        })
    }
}

/// Partial name update for categories and subcategories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub name_ar: Option<String>,
}

impl From<LocalizedName> for CategoryUpdate {
    fn from(names: LocalizedName) -> Self {
        Self {
            name: Some(names.name),
            name_ar: Some(names.name_ar),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn names(name: &str, name_ar: &str) -> LocalizedName {
        LocalizedName::validate(&CategoryForm {
            name: name.into(),
            name_ar: name_ar.into(),
        })
        .unwrap()
    }

    #[test]
    fn test_validate_requires_name() {
        let err = LocalizedName::validate(&CategoryForm {
            name: "  ".into(),
            name_ar: "قهوة".into(),
        });
        assert_eq!(err, Err(ValidationError::Required { field: "name" }));
        assert_eq!(names(" Filters ", "").name, "Filters");
    }

    #[test]
    fn test_new_category_has_no_subcategories() {
        let category = Category::new(CategoryId::new("cat-1"), names("Filters", "فلاتر"));
        assert!(category.subcategories.is_empty());
    }

    #[test]
    fn test_subcategory_lifecycle() {
        let mut category = Category::new(CategoryId::new("cat-1"), names("Accessories", ""));
        let id = SubcategoryId::new("subcat-1");
        category.add_subcategory(Subcategory::new(id.clone(), names("Cups", "أكواب")));

        assert!(category.update_subcategory(
            &id,
            CategoryUpdate {
                name: Some("Cups & Mugs".into()),
                name_ar: None,
            }
        ));
        let sub = category.subcategory(&id).unwrap();
        assert_eq!(sub.name, "Cups & Mugs");
        assert_eq!(sub.name_ar, "أكواب");

        assert!(!category.update_subcategory(&SubcategoryId::new("nope"), CategoryUpdate::default()));
        assert!(category.remove_subcategory(&id));
        assert!(!category.remove_subcategory(&id));
    }

    #[test]
    fn test_apply_keeps_subcategories() {
        let mut category = Category::new(CategoryId::new("cat-1"), names("Accessories", ""));
        category.add_subcategory(Subcategory::new(SubcategoryId::new("cups"), names("Cups", "")));
        category.apply(names("Extras", "إضافات").into());
        assert_eq!(category.name, "Extras");
        assert_eq!(category.localized_name(Language::Ar), "إضافات");
        assert_eq!(category.subcategories.len(), 1);
    }

    #[test]
    fn test_missing_subcategories_deserialize_empty() {
        let category: Category =
            serde_json::from_str(r#"{"id":"x","name":"X","nameAr":"س"}"#).unwrap();
        assert!(category.subcategories.is_empty());
    }
}
