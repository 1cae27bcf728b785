//! Site-wide settings edited from the admin panel.

use serde::{Deserialize, Serialize};
use url::Url;

use super::{ValidationError, localized};
use crate::types::{Email, Language};

/// Branding, contact details and social links shown across the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_name_ar: String,
    pub tagline: String,
    pub tagline_ar: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "HARTNA COMPANY".to_owned(),
            site_name_ar: "شركة هارتنا".to_owned(),
            tagline: "Premium Espresso & Coffee Machines".to_owned(),
            tagline_ar: "آلات إسبريسو وقهوة فاخرة".to_owned(),
            phone: "00963412554899".to_owned(),
            email: "hartna111@gmail.com".to_owned(),
            address: "Syria - Lattakia, Port Said Street".to_owned(),
            facebook: String::new(),
            instagram: String::new(),
            twitter: String::new(),
        }
    }
}

impl SiteSettings {
    #[must_use]
    pub fn localized_site_name(&self, language: Language) -> &str {
        localized(language, &self.site_name, &self.site_name_ar)
    }

    #[must_use]
    pub fn localized_tagline(&self, language: Language) -> &str {
        localized(language, &self.tagline, &self.tagline_ar)
    }

    /// Configured social links as `(network, url)` pairs, skipping blanks.
    #[must_use]
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("facebook", self.facebook.as_str()),
            ("instagram", self.instagram.as_str()),
            ("twitter", self.twitter.as_str()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .collect()
    }

    pub fn apply(&mut self, update: SiteSettingsUpdate) {
        let SiteSettingsUpdate {
            site_name,
            site_name_ar,
            tagline,
            tagline_ar,
            phone,
            email,
            address,
            facebook,
            instagram,
            twitter,
        } = update;

        let fields = [
            (&mut self.site_name, site_name),
            (&mut self.site_name_ar, site_name_ar),
            (&mut self.tagline, tagline),
            (&mut self.tagline_ar, tagline_ar),
            (&mut self.phone, phone),
            (&mut self.email, email),
            (&mut self.address, address),
            (&mut self.facebook, facebook),
            (&mut self.instagram, instagram),
            (&mut self.twitter, twitter),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

/// Raw settings form input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsForm {
    pub site_name: String,
    pub site_name_ar: String,
    pub tagline: String,
    pub tagline_ar: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
}

/// Partial settings update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSettingsUpdate {
    pub site_name: Option<String>,
    pub site_name_ar: Option<String>,
    pub tagline: Option<String>,
    pub tagline_ar: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}

impl SiteSettingsUpdate {
    /// Validate the settings form. Every field is replaced by its trimmed
    /// value.
    ///
    /// A non-blank email must parse and non-blank social links must be
    /// absolute http(s) URLs.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(form: &SettingsForm) -> Result<Self, ValidationError> {
        let email = form.email.trim();
        if !email.is_empty() {
            Email::parse(email)?;
        }

        Ok(Self {
            site_name: Some(form.site_name.trim().to_owned()),
            site_name_ar: Some(form.site_name_ar.trim().to_owned()),
            tagline: Some(form.tagline.trim().to_owned()),
            tagline_ar: Some(form.tagline_ar.trim().to_owned()),
            phone: Some(form.phone.trim().to_owned()),
            email: Some(email.to_owned()),
            address: Some(form.address.trim().to_owned()),
            facebook: Some(social_url("facebook", &form.facebook)?),
            instagram: Some(social_url("instagram", &form.instagram)?),
            twitter: Some(social_url("twitter", &form.twitter)?),
        })
    }
}

fn social_url(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(String::new());
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(value.to_owned())
        }
        _ => Err(ValidationError::InvalidUrl { field }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> SettingsForm {
        let defaults = SiteSettings::default();
        SettingsForm {
            site_name: defaults.site_name,
            site_name_ar: defaults.site_name_ar,
            tagline: defaults.tagline,
            tagline_ar: defaults.tagline_ar,
            phone: defaults.phone,
            email: defaults.email,
            address: defaults.address,
            ..SettingsForm::default()
        }
    }

    #[test]
    fn test_defaults() {
        let settings = SiteSettings::default();
        assert_eq!(settings.site_name, "HARTNA COMPANY");
        assert_eq!(settings.localized_site_name(Language::Ar), "شركة هارتنا");
        assert!(settings.social_links().is_empty());
    }

    #[test]
    fn test_partial_update_merges() {
        let mut settings = SiteSettings::default();
        settings.apply(SiteSettingsUpdate {
            phone: Some("0999".into()),
            ..SiteSettingsUpdate::default()
        });
        assert_eq!(settings.phone, "0999");
        assert_eq!(settings.site_name, "HARTNA COMPANY");
    }

    #[test]
    fn test_social_urls_validated() {
        let mut f = form();
        f.facebook = "https://facebook.com/hartna".into();
        let update = SiteSettingsUpdate::validate(&f).unwrap();
        assert_eq!(update.facebook.as_deref(), Some("https://facebook.com/hartna"));
        assert_eq!(update.twitter.as_deref(), Some(""));

        f.instagram = "instagram.com/hartna".into();
        assert_eq!(
            SiteSettingsUpdate::validate(&f),
            Err(ValidationError::InvalidUrl { field: "instagram" })
        );

        f.instagram = "javascript:alert(1)".into();
        assert!(SiteSettingsUpdate::validate(&f).is_err());
    }

    #[test]
    fn test_email_validated_when_present() {
        let mut f = form();
        f.email = "not-an-email".into();
        assert!(matches!(
            SiteSettingsUpdate::validate(&f),
            Err(ValidationError::Email(_))
        ));

        f.email = "  ".into();
        let update = SiteSettingsUpdate::validate(&f).unwrap();
        assert_eq!(update.email.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let settings: SiteSettings = serde_json::from_str(r#"{"phone":"123"}"#).unwrap();
        assert_eq!(settings.phone, "123");
        assert_eq!(settings.site_name, "HARTNA COMPANY");
    }
}
