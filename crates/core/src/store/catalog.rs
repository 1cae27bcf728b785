//! Catalog operations over a [`Storage`] backend.

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use super::{
    CATEGORIES_KEY, HERO_SLIDES_KEY, MESSAGES_KEY, PRODUCTS_KEY, SETTINGS_KEY, Storage, StoreError,
};
use crate::models::ids::{next_product_id, timestamped_id};
use crate::models::{
    Catalog, Category, CategoryUpdate, HeroSlide, HeroSlideUpdate, LocalizedName, Message,
    NewHeroSlide, NewMessage, NewProduct, Product, ProductUpdate, SiteSettings, SiteSettingsUpdate,
    Subcategory,
};
use crate::seed;
use crate::types::{CategoryId, MessageId, ProductId, SlideId, SubcategoryId};

/// The catalog data set: products, categories, hero slides, settings and
/// contact messages.
///
/// Reads always go to storage. Writes load the whole collection, change it,
/// and save it back while holding a store-wide lock, so concurrent writers
/// in one process cannot lose each other's updates.
#[derive(Debug)]
pub struct CatalogStore<S> {
    storage: S,
    write_lock: Mutex<()>,
}

impl<S: Storage> CatalogStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    async fn read<T: DeserializeOwned>(
        &self,
        key: &str,
        default: impl FnOnce() -> T,
    ) -> Result<T, StoreError> {
        match self.storage.load(key).await? {
            Some(json) => serde_json::from_str(&json).map_err(|source| StoreError::Serialization {
                key: key.to_owned(),
                source,
            }),
            None => Ok(default()),
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Serialization {
            key: key.to_owned(),
            source,
        })?;
        self.storage.save(key, &json).await
    }

    /// Read-modify-write one collection.
    async fn mutate<T, R>(
        &self,
        key: &str,
        default: impl FnOnce() -> T,
        change: impl FnOnce(&mut T) -> R,
    ) -> Result<R, StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        let _guard = self.write_lock.lock().await;
        let mut value = self.read(key, default).await?;
        let result = change(&mut value);
        self.write(key, &value).await?;
        Ok(result)
    }

    /// Like [`Self::mutate`], but `change` returns `None` to leave storage
    /// untouched.
    async fn modify<T, R>(
        &self,
        key: &str,
        default: impl FnOnce() -> T,
        change: impl FnOnce(&mut T) -> Option<R>,
    ) -> Result<Option<R>, StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        let _guard = self.write_lock.lock().await;
        let mut value = self.read(key, default).await?;
        let Some(result) = change(&mut value) else {
            return Ok(None);
        };
        self.write(key, &value).await?;
        Ok(Some(result))
    }

    // Products

    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn products(&self) -> Result<Vec<Product>, StoreError> {
        self.read(PRODUCTS_KEY, seed::default_products).await
    }

    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.products().await?.into_iter().find(|p| &p.id == id))
    }

    /// Append a product under the next numeric id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn add_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let created = self
            .mutate(PRODUCTS_KEY, seed::default_products, |products: &mut Vec<Product>| {
                let id = next_product_id(products.iter().map(|p| &p.id));
                let product = product.into_product(id);
                products.push(product.clone());
                product
            })
            .await?;
        Ok(created)
    }

    /// Returns `false` if no product has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn update_product(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<bool, StoreError> {
        let updated = self
            .modify(PRODUCTS_KEY, seed::default_products, |products: &mut Vec<Product>| {
                let product = products.iter_mut().find(|p| &p.id == id)?;
                product.apply(update);
                Some(())
            })
            .await?;
        Ok(updated.is_some())
    }

    /// Returns `false` if no product has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn delete_product(&self, id: &ProductId) -> Result<bool, StoreError> {
        let deleted = self
            .modify(PRODUCTS_KEY, seed::default_products, |products: &mut Vec<Product>| {
                remove_where(products, |p| &p.id == id)
            })
            .await?;
        Ok(deleted.is_some())
    }

    // Categories

    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        self.read(CATEGORIES_KEY, seed::default_categories).await
    }

    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn category(&self, id: &CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.categories().await?.into_iter().find(|c| &c.id == id))
    }

    /// Append a category with a `cat-<millis>` id and no subcategories.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn add_category(&self, names: LocalizedName) -> Result<Category, StoreError> {
        let now = Utc::now().timestamp_millis();
        let created = self
            .mutate(CATEGORIES_KEY, seed::default_categories, |categories: &mut Vec<Category>| {
                let id = timestamped_id("cat", now, |candidate| {
                    categories.iter().any(|c| c.id == candidate)
                });
                let category = Category::new(CategoryId::new(id), names);
                categories.push(category.clone());
                category
            })
            .await?;
        Ok(created)
    }

    /// Rename a category. Returns `false` if no category has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn update_category(
        &self,
        id: &CategoryId,
        update: CategoryUpdate,
    ) -> Result<bool, StoreError> {
        let updated = self
            .modify(CATEGORIES_KEY, seed::default_categories, |categories: &mut Vec<Category>| {
                categories.iter_mut().find(|c| &c.id == id)?.apply(update);
                Some(())
            })
            .await?;
        Ok(updated.is_some())
    }

    /// Delete a category. Products that reference it are left as they are.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn delete_category(&self, id: &CategoryId) -> Result<bool, StoreError> {
        let deleted = self
            .modify(CATEGORIES_KEY, seed::default_categories, |categories: &mut Vec<Category>| {
                remove_where(categories, |c| &c.id == id)
            })
            .await?;
        Ok(deleted.is_some())
    }

    /// Add a `subcat-<millis>` subcategory. Returns `None` if the parent
    /// category does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn add_subcategory(
        &self,
        category_id: &CategoryId,
        names: LocalizedName,
    ) -> Result<Option<Subcategory>, StoreError> {
        let now = Utc::now().timestamp_millis();
        self.modify(CATEGORIES_KEY, seed::default_categories, |categories: &mut Vec<Category>| {
            let category = categories.iter_mut().find(|c| &c.id == category_id)?;
            let id = timestamped_id("subcat", now, |candidate| {
                category.subcategories.iter().any(|s| s.id == candidate)
            });
            let subcategory = Subcategory::new(SubcategoryId::new(id), names);
            category.add_subcategory(subcategory.clone());
            Some(subcategory)
        })
        .await
    }

    /// Returns `false` if the category or subcategory does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn update_subcategory(
        &self,
        category_id: &CategoryId,
        subcategory_id: &SubcategoryId,
        update: CategoryUpdate,
    ) -> Result<bool, StoreError> {
        let updated = self
            .modify(CATEGORIES_KEY, seed::default_categories, |categories: &mut Vec<Category>| {
                let category = categories.iter_mut().find(|c| &c.id == category_id)?;
                category
                    .update_subcategory(subcategory_id, update)
                    .then_some(())
            })
            .await?;
        Ok(updated.is_some())
    }

    /// Returns `false` if the category or subcategory does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn delete_subcategory(
        &self,
        category_id: &CategoryId,
        subcategory_id: &SubcategoryId,
    ) -> Result<bool, StoreError> {
        let deleted = self
            .modify(CATEGORIES_KEY, seed::default_categories, |categories: &mut Vec<Category>| {
                let category = categories.iter_mut().find(|c| &c.id == category_id)?;
                category.remove_subcategory(subcategory_id).then_some(())
            })
            .await?;
        Ok(deleted.is_some())
    }

    // Hero slides

    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn hero_slides(&self) -> Result<Vec<HeroSlide>, StoreError> {
        self.read(HERO_SLIDES_KEY, seed::default_hero_slides).await
    }

    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn hero_slide(&self, id: &SlideId) -> Result<Option<HeroSlide>, StoreError> {
        Ok(self.hero_slides().await?.into_iter().find(|s| &s.id == id))
    }

    /// Append a slide with a `slide-<millis>` id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn add_hero_slide(&self, slide: NewHeroSlide) -> Result<HeroSlide, StoreError> {
        let now = Utc::now().timestamp_millis();
        let created = self
            .mutate(HERO_SLIDES_KEY, seed::default_hero_slides, |slides: &mut Vec<HeroSlide>| {
                let id = timestamped_id("slide", now, |candidate| {
                    slides.iter().any(|s| s.id == candidate)
                });
                let slide = slide.into_slide(SlideId::new(id));
                slides.push(slide.clone());
                slide
            })
            .await?;
        Ok(created)
    }

    /// Returns `false` if no slide has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn update_hero_slide(
        &self,
        id: &SlideId,
        update: HeroSlideUpdate,
    ) -> Result<bool, StoreError> {
        let updated = self
            .modify(HERO_SLIDES_KEY, seed::default_hero_slides, |slides: &mut Vec<HeroSlide>| {
                slides.iter_mut().find(|s| &s.id == id)?.apply(update);
                Some(())
            })
            .await?;
        Ok(updated.is_some())
    }

    /// Returns `false` if no slide has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn delete_hero_slide(&self, id: &SlideId) -> Result<bool, StoreError> {
        let deleted = self
            .modify(HERO_SLIDES_KEY, seed::default_hero_slides, |slides: &mut Vec<HeroSlide>| {
                remove_where(slides, |s| &s.id == id)
            })
            .await?;
        Ok(deleted.is_some())
    }

    // Settings

    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn settings(&self) -> Result<SiteSettings, StoreError> {
        self.read(SETTINGS_KEY, SiteSettings::default).await
    }

    /// Merge `update` into the stored settings and return the result.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn update_settings(
        &self,
        update: SiteSettingsUpdate,
    ) -> Result<SiteSettings, StoreError> {
        self.mutate(SETTINGS_KEY, SiteSettings::default, |settings: &mut SiteSettings| {
            settings.apply(update);
            settings.clone()
        })
        .await
    }

    /// Replace the stored settings with the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn reset_settings(&self) -> Result<SiteSettings, StoreError> {
        let _guard = self.write_lock.lock().await;
        let defaults = SiteSettings::default();
        self.write(SETTINGS_KEY, &defaults).await?;
        Ok(defaults)
    }

    // Messages

    /// Stored messages, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn messages(&self) -> Result<Vec<Message>, StoreError> {
        self.read(MESSAGES_KEY, Vec::new).await
    }

    /// Store a message with a `<millis>` id and the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn add_message(&self, message: NewMessage) -> Result<Message, StoreError> {
        let now = Utc::now();
        let created = self
            .mutate(MESSAGES_KEY, Vec::new, |messages: &mut Vec<Message>| {
                let id = timestamped_id("", now.timestamp_millis(), |candidate| {
                    messages.iter().any(|m| m.id == candidate)
                });
                let message = message.into_message(MessageId::new(id), now);
                messages.push(message.clone());
                message
            })
            .await?;
        Ok(created)
    }

    /// Returns `false` if no message has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the document is corrupt.
    pub async fn delete_message(&self, id: &MessageId) -> Result<bool, StoreError> {
        let deleted = self
            .modify(MESSAGES_KEY, Vec::new, |messages: &mut Vec<Message>| {
                remove_where(messages, |m| &m.id == id)
            })
            .await?;
        Ok(deleted.is_some())
    }

    // Whole catalog

    /// Load products, categories, hero slides and settings together.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or any document is corrupt.
    pub async fn snapshot(&self) -> Result<Catalog, StoreError> {
        Ok(Catalog {
            products: self.products().await?,
            categories: self.categories().await?,
            hero_slides: self.hero_slides().await?,
            settings: self.settings().await?,
        })
    }

    /// Write the default content for every collection.
    ///
    /// Keys that already hold a document are skipped unless `force` is set.
    /// Returns the keys that were written.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn seed(&self, force: bool) -> Result<Vec<&'static str>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut written = Vec::new();

        for key in super::ALL_KEYS {
            if !force && self.storage.load(key).await?.is_some() {
                continue;
            }
            match key {
                PRODUCTS_KEY => self.write(key, &seed::default_products()).await?,
                CATEGORIES_KEY => self.write(key, &seed::default_categories()).await?,
                HERO_SLIDES_KEY => self.write(key, &seed::default_hero_slides()).await?,
                SETTINGS_KEY => self.write(key, &SiteSettings::default()).await?,
                _ => self.write(key, &Vec::<Message>::new()).await?,
            }
            written.push(key);
        }

        tracing::info!(?written, force, "Seeded catalog");
        Ok(written)
    }
}

/// Remove every element matching `pred`; `None` when nothing matched.
fn remove_where<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Option<()> {
    let before = items.len();
    items.retain(|item| !pred(item));
    (items.len() != before).then_some(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{CategoryForm, HeroSlideForm, MessageForm, ProductForm};
    use crate::store::{FileStorage, MemoryStorage};
    use crate::types::Price;

    fn store() -> CatalogStore<MemoryStorage> {
        CatalogStore::new(MemoryStorage::new())
    }

    fn names(name: &str) -> LocalizedName {
        LocalizedName::validate(&CategoryForm {
            name: name.into(),
            name_ar: String::new(),
        })
        .unwrap()
    }

    fn new_product(name: &str) -> NewProduct {
        NewProduct::validate(&ProductForm {
            name: name.into(),
            price: "100".into(),
            category: "accessories".into(),
            ..ProductForm::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_absent_keys_read_as_defaults() {
        let store = store();
        assert_eq!(store.products().await.unwrap().len(), 15);
        assert_eq!(store.categories().await.unwrap().len(), 6);
        assert_eq!(store.hero_slides().await.unwrap().len(), 3);
        assert_eq!(store.settings().await.unwrap(), SiteSettings::default());
        assert!(store.messages().await.unwrap().is_empty());
        assert_eq!(store.storage().load(PRODUCTS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_add_product_assigns_next_numeric_id() {
        let store = store();
        let product = store.add_product(new_product("Tamper")).await.unwrap();
        assert_eq!(product.id, ProductId::new("16"));
        assert_eq!(store.products().await.unwrap().len(), 16);
        assert_eq!(
            store.product(&product.id).await.unwrap().unwrap().name,
            "Tamper"
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_product() {
        let store = store();
        let id = ProductId::new("6");
        let updated = store
            .update_product(
                &id,
                ProductUpdate {
                    price: Some(Price::from_units(89)),
                    ..ProductUpdate::default()
                },
            )
            .await
            .unwrap();
        assert!(updated);
        let product = store.product(&id).await.unwrap().unwrap();
        assert_eq!(product.price, Price::from_units(89));
        assert_eq!(product.name, "Espresso Cup Set");

        assert!(store.delete_product(&id).await.unwrap());
        assert!(!store.delete_product(&id).await.unwrap());
        assert_eq!(store.product(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_id_leaves_storage_untouched() {
        let store = store();
        let missing = ProductId::new("404");
        assert!(
            !store
                .update_product(&missing, ProductUpdate::default())
                .await
                .unwrap()
        );
        assert!(!store.delete_product(&missing).await.unwrap());
        assert_eq!(store.storage().load(PRODUCTS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_category_and_subcategory_lifecycle() {
        let store = store();
        let category = store.add_category(names("Syrups")).await.unwrap();
        assert!(category.id.as_str().starts_with("cat-"));
        assert!(category.subcategories.is_empty());

        let sub = store
            .add_subcategory(&category.id, names("Vanilla"))
            .await
            .unwrap()
            .unwrap();
        assert!(sub.id.as_str().starts_with("subcat-"));

        assert!(
            store
                .update_subcategory(&category.id, &sub.id, names("French Vanilla").into())
                .await
                .unwrap()
        );
        let stored = store.category(&category.id).await.unwrap().unwrap();
        assert_eq!(stored.subcategories.first().unwrap().name, "French Vanilla");

        assert!(store.delete_subcategory(&category.id, &sub.id).await.unwrap());
        assert!(store.delete_category(&category.id).await.unwrap());
        assert_eq!(store.categories().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_add_subcategory_to_missing_category() {
        let store = store();
        let result = store
            .add_subcategory(&CategoryId::new("nope"), names("X"))
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_category_ids_unique_within_same_millisecond() {
        let store = store();
        let a = store.add_category(names("A")).await.unwrap();
        let b = store.add_category(names("B")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_delete_category_keeps_products() {
        let store = store();
        store
            .delete_category(&CategoryId::new("accessories"))
            .await
            .unwrap();
        let catalog = store.snapshot().await.unwrap();
        assert!(
            catalog
                .products
                .iter()
                .any(|p| p.category == CategoryId::new("accessories"))
        );
    }

    #[tokio::test]
    async fn test_hero_slides() {
        let store = store();
        let slide = store
            .add_hero_slide(
                NewHeroSlide::validate(&HeroSlideForm {
                    title: "Summer Slush".into(),
                    image: "/uploads/slush.jpg".into(),
                    ..HeroSlideForm::default()
                })
                .unwrap(),
            )
            .await
            .unwrap();
        assert!(slide.id.as_str().starts_with("slide-"));
        assert_eq!(store.hero_slides().await.unwrap().len(), 4);

        assert!(
            store
                .update_hero_slide(
                    &slide.id,
                    HeroSlideUpdate {
                        link: Some(Some("/products/slush-machines".into())),
                        ..HeroSlideUpdate::default()
                    }
                )
                .await
                .unwrap()
        );
        let stored = store.hero_slide(&slide.id).await.unwrap().unwrap();
        assert_eq!(stored.cta_link(), "/products/slush-machines");
        assert!(store.delete_hero_slide(&slide.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_settings_update_and_reset() {
        let store = store();
        let settings = store
            .update_settings(SiteSettingsUpdate {
                phone: Some("0999".into()),
                ..SiteSettingsUpdate::default()
            })
            .await
            .unwrap();
        assert_eq!(settings.phone, "0999");
        assert_eq!(store.settings().await.unwrap().phone, "0999");

        let reset = store.reset_settings().await.unwrap();
        assert_eq!(reset, SiteSettings::default());
        assert_eq!(store.settings().await.unwrap(), SiteSettings::default());
    }

    #[tokio::test]
    async fn test_messages() {
        let store = store();
        let message = store
            .add_message(
                NewMessage::validate(&MessageForm {
                    first_name: "Sami".into(),
                    last_name: "Khoury".into(),
                    email: "sami@example.com".into(),
                    subject: "Grinder".into(),
                    message: "Is the Fine grinder in stock?".into(),
                    ..MessageForm::default()
                })
                .unwrap(),
            )
            .await
            .unwrap();
        assert!(message.id.as_str().chars().all(|c| c.is_ascii_digit()));
        assert_eq!(store.messages().await.unwrap().len(), 1);
        assert!(store.delete_message(&message.id).await.unwrap());
        assert!(store.messages().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_reported_not_overwritten() {
        let store = store();
        store.storage().save(PRODUCTS_KEY, "{not json").await.unwrap();

        assert!(matches!(
            store.products().await,
            Err(StoreError::Serialization { .. })
        ));
        assert!(store.add_product(new_product("X")).await.is_err());
        assert_eq!(
            store.storage().load(PRODUCTS_KEY).await.unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[tokio::test]
    async fn test_negative_stored_price_is_reported() {
        let store = store();
        let mut products = serde_json::to_value(store.products().await.unwrap()).unwrap();
        let first = products.as_array_mut().unwrap().first_mut().unwrap();
        first["price"] = serde_json::json!(-10);
        store
            .storage()
            .save(PRODUCTS_KEY, &products.to_string())
            .await
            .unwrap();

        assert!(matches!(
            store.products().await,
            Err(StoreError::Serialization { .. })
        ));
        assert!(store.snapshot().await.is_err());
    }

    #[tokio::test]
    async fn test_seed_skips_existing_unless_forced() {
        let store = store();
        store
            .update_settings(SiteSettingsUpdate {
                phone: Some("1".into()),
                ..SiteSettingsUpdate::default()
            })
            .await
            .unwrap();

        let written = store.seed(false).await.unwrap();
        assert!(!written.contains(&SETTINGS_KEY));
        assert_eq!(written.len(), 4);
        assert_eq!(store.settings().await.unwrap().phone, "1");

        let forced = store.seed(true).await.unwrap();
        assert_eq!(forced.len(), 5);
        assert_eq!(store.settings().await.unwrap(), SiteSettings::default());
    }

    #[tokio::test]
    async fn test_file_backed_stores_share_writes() {
        let dir = tempfile::tempdir().unwrap();
        let admin = CatalogStore::new(FileStorage::new(dir.path()));
        let storefront = CatalogStore::new(FileStorage::new(dir.path()));

        let product = admin.add_product(new_product("Knock Box")).await.unwrap();
        let seen = storefront.product(&product.id).await.unwrap();
        assert_eq!(seen.map(|p| p.name), Some("Knock Box".to_owned()));
    }

    #[tokio::test]
    async fn test_concurrent_saves_from_two_stores() {
        let dir = tempfile::tempdir().unwrap();
        let admin = Arc::new(CatalogStore::new(FileStorage::new(dir.path())));
        let cli = Arc::new(CatalogStore::new(FileStorage::new(dir.path())));

        let mut tasks = Vec::new();
        for _ in 0..50 {
            for store in [&admin, &cli] {
                let store = Arc::clone(store);
                tasks.push(tokio::spawn(async move { store.reset_settings().await }));
            }
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(admin.settings().await.unwrap(), SiteSettings::default());
        let leftovers = std::fs::read_dir(dir.path())
            .unwrap()
            .filter(|e| {
                let name = e.as_ref().unwrap().file_name();
                name.to_string_lossy().ends_with(".tmp")
            })
            .count();
        assert_eq!(leftovers, 0);
    }
}
