//! Contact-form messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ValidationError, optional, required};
use crate::types::{Email, MessageId};

/// A message left through the storefront contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Raw contact form input, from either the HTML form or the JSON endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// A validated message that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl NewMessage {
    /// First name, last name, email, subject and message are required.
    /// The email must parse; phone is optional.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(form: &MessageForm) -> Result<Self, ValidationError> {
        let first_name = required("firstName", &form.first_name)?;
        let last_name = required("lastName", &form.last_name)?;
        let email = required("email", &form.email)?;
        let subject = required("subject", &form.subject)?;
        let message = required("message", &form.message)?;

        Ok(Self {
            first_name,
            last_name,
            email: Email::parse(&email)?,
            phone: optional(&form.phone),
            subject,
            message,
        })
    }

    #[must_use]
    pub fn into_message(self, id: MessageId, timestamp: DateTime<Utc>) -> Message {
        Message {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            subject: self.subject,
            message: self.message,
            timestamp,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> MessageForm {
        MessageForm {
            first_name: "Lina".into(),
            last_name: "Haddad".into(),
            email: "lina@example.com".into(),
            phone: String::new(),
            subject: "Espresso machine".into(),
            message: "Do you deliver to Tartus?".into(),
        }
    }

    #[test]
    fn test_valid_message() {
        let message = NewMessage::validate(&form()).unwrap();
        assert_eq!(message.email.as_str(), "lina@example.com");
        assert_eq!(message.phone, None);
    }

    #[test]
    fn test_each_required_field() {
        let cases: [(fn(&mut MessageForm), &str); 5] = [
            (|f| f.first_name.clear(), "firstName"),
            (|f| f.last_name.clear(), "lastName"),
            (|f| f.email = " ".into(), "email"),
            (|f| f.subject.clear(), "subject"),
            (|f| f.message.clear(), "message"),
        ];
        for (blank, field) in cases {
            let mut f = form();
            blank(&mut f);
            assert_eq!(
                NewMessage::validate(&f),
                Err(ValidationError::Required { field }),
                "{field}"
            );
        }
    }

    #[test]
    fn test_invalid_email() {
        let mut f = form();
        f.email = "lina-at-example".into();
        assert!(matches!(
            NewMessage::validate(&f),
            Err(ValidationError::Email(_))
        ));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let parsed: MessageForm = serde_json::from_str(
            r#"{"firstName":"A","lastName":"B","email":"a@b.co","subject":"S","message":"M"}"#,
        )
        .unwrap();
        let message = NewMessage::validate(&parsed)
            .unwrap()
            .into_message(MessageId::new("1"), Utc::now());
        assert_eq!(message.full_name(), "A B");

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["firstName"], "A");
        assert!(value.get("phone").is_none());
    }
}
