//! Homepage hero slides.

use serde::{Deserialize, Serialize};

use super::{ValidationError, localized, optional, required};
use crate::types::{Language, SlideId};

/// Where a slide's call-to-action points when it has no link.
pub const DEFAULT_CTA_LINK: &str = "/shop-now";

/// A slide in the homepage hero carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub id: SlideId,
    pub title: String,
    #[serde(default)]
    pub title_ar: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub subtitle_ar: String,
    pub image: String,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub cta_ar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl HeroSlide {
    #[must_use]
    pub fn localized_title(&self, language: Language) -> &str {
        localized(language, &self.title, &self.title_ar)
    }

    #[must_use]
    pub fn localized_subtitle(&self, language: Language) -> &str {
        localized(language, &self.subtitle, &self.subtitle_ar)
    }

    #[must_use]
    pub fn localized_cta(&self, language: Language) -> &str {
        localized(language, &self.cta, &self.cta_ar)
    }

    /// The slide's link, or [`DEFAULT_CTA_LINK`].
    #[must_use]
    pub fn cta_link(&self) -> &str {
        self.link
            .as_deref()
            .filter(|link| !link.trim().is_empty())
            .unwrap_or(DEFAULT_CTA_LINK)
    }

    pub fn apply(&mut self, update: HeroSlideUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(title_ar) = update.title_ar {
            self.title_ar = title_ar;
        }
        if let Some(subtitle) = update.subtitle {
            self.subtitle = subtitle;
        }
        if let Some(subtitle_ar) = update.subtitle_ar {
            self.subtitle_ar = subtitle_ar;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(cta) = update.cta {
            self.cta = cta;
        }
        if let Some(cta_ar) = update.cta_ar {
            self.cta_ar = cta_ar;
        }
        if let Some(link) = update.link {
            self.link = link;
        }
    }
}

/// Raw slide form input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSlideForm {
    pub title: String,
    pub title_ar: String,
    pub subtitle: String,
    pub subtitle_ar: String,
    pub image: String,
    pub cta: String,
    pub cta_ar: String,
    pub link: String,
}

/// A validated slide that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHeroSlide {
    pub title: String,
    pub title_ar: String,
    pub subtitle: String,
    pub subtitle_ar: String,
    pub image: String,
    pub cta: String,
    pub cta_ar: String,
    pub link: Option<String>,
}

impl NewHeroSlide {
    /// Title and image are required; a blank link is stored as `None`.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(form: &HeroSlideForm) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", &form.title)?,
            title_ar: form.title_ar.trim().to_owned(),
            subtitle: form.subtitle.trim().to_owned(),
            subtitle_ar: form.subtitle_ar.trim().to_owned(),
            image: required("image", &form.image)?,
            cta: form.cta.trim().to_owned(),
            cta_ar: form.cta_ar.trim().to_owned(),
            link: optional(&form.link),
        })
    }

    #[must_use]
    pub fn into_slide(self, id: SlideId) -> HeroSlide {
        HeroSlide {
            id,
            title: self.title,
            title_ar: self.title_ar,
            subtitle: self.subtitle,
            subtitle_ar: self.subtitle_ar,
            image: self.image,
            cta: self.cta,
            cta_ar: self.cta_ar,
            link: self.link,
        }
    }
}

/// Partial slide update. `link: Some(None)` clears the link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroSlideUpdate {
    pub title: Option<String>,
    pub title_ar: Option<String>,
    pub subtitle: Option<String>,
    pub subtitle_ar: Option<String>,
    pub image: Option<String>,
    pub cta: Option<String>,
    pub cta_ar: Option<String>,
    pub link: Option<Option<String>>,
}

impl From<NewHeroSlide> for HeroSlideUpdate {
    fn from(slide: NewHeroSlide) -> Self {
        Self {
            title: Some(slide.title),
            title_ar: Some(slide.title_ar),
            subtitle: Some(slide.subtitle),
            subtitle_ar: Some(slide.subtitle_ar),
            image: Some(slide.image),
            cta: Some(slide.cta),
            cta_ar: Some(slide.cta_ar),
            link: Some(slide.link),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> HeroSlideForm {
        HeroSlideForm {
            title: "Premium Espresso Machines".into(),
            title_ar: "آلات إسبريسو فاخرة".into(),
            image: "/premium-espresso-machine-hero.jpg".into(),
            cta: "Shop Now".into(),
            ..HeroSlideForm::default()
        }
    }

    #[test]
    fn test_title_and_image_required() {
        let mut no_title = form();
        no_title.title.clear();
        assert_eq!(
            NewHeroSlide::validate(&no_title),
            Err(ValidationError::Required { field: "title" })
        );

        let mut no_image = form();
        no_image.image = "  ".into();
        assert_eq!(
            NewHeroSlide::validate(&no_image),
            Err(ValidationError::Required { field: "image" })
        );
    }

    #[test]
    fn test_blank_link_falls_back_to_shop_now() {
        let slide = NewHeroSlide::validate(&form())
            .unwrap()
            .into_slide(SlideId::new("slide-1"));
        assert_eq!(slide.link, None);
        assert_eq!(slide.cta_link(), DEFAULT_CTA_LINK);
    }

    #[test]
    fn test_update_replaces_link() {
        let mut slide = NewHeroSlide::validate(&form())
            .unwrap()
            .into_slide(SlideId::new("slide-1"));
        let mut edited = form();
        edited.link = "/products/accessories".into();
        slide.apply(NewHeroSlide::validate(&edited).unwrap().into());
        assert_eq!(slide.cta_link(), "/products/accessories");

        slide.apply(NewHeroSlide::validate(&form()).unwrap().into());
        assert_eq!(slide.link, None);
    }

    #[test]
    fn test_localized() {
        let slide = NewHeroSlide::validate(&form())
            .unwrap()
            .into_slide(SlideId::new("1"));
        assert_eq!(slide.localized_title(Language::Ar), "آلات إسبريسو فاخرة");
        assert_eq!(slide.localized_cta(Language::Ar), "Shop Now");
    }
}
