//! Contact page and message submission handlers.
//!
//! Messages arrive either from the HTML form on `/contact` or as JSON on
//! `/api/messages`; both are validated the same way and appended to the
//! `messages` collection.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hartna_core::{I18n, Message, MessageForm, NewMessage, ValidationError};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::page::{Layout, Page};
use crate::state::AppState;

/// Result banner shown after a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub form: MessageForm,
    pub outcome: Option<Outcome>,
}

impl ContactTemplate {
    fn sent(&self) -> bool {
        self.outcome == Some(Outcome::Sent)
    }

    fn failed(&self) -> bool {
        self.outcome == Some(Outcome::Failed)
    }
}

/// JSON reply from `/api/messages`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MessageResponse {
    Sent { success: bool, message: String },
    Error { error: String },
}

impl MessageResponse {
    fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}

async fn store_message(state: &AppState, form: &MessageForm) -> Result<Message, AppError> {
    let new_message = NewMessage::validate(form)?;
    let message = state.store().add_message(new_message).await?;
    add_breadcrumb("contact", "Message submitted");
    tracing::info!(message_id = %message.id, "Contact message stored");
    Ok(message)
}

/// Display the contact page.
#[instrument(skip(page))]
pub async fn show(page: Page) -> impl IntoResponse {
    ContactTemplate {
        i18n: page.i18n(),
        layout: page.layout(),
        form: MessageForm::default(),
        outcome: None,
    }
}

/// Handle the contact form.
///
/// Invalid input re-renders the form with the visitor's entries and an
/// error banner.
#[instrument(skip(state, page, form))]
pub async fn submit(
    State(state): State<AppState>,
    page: Page,
    Form(form): Form<MessageForm>,
) -> Result<Response, AppError> {
    let (status, form, outcome) = match store_message(&state, &form).await {
        Ok(_) => (StatusCode::OK, MessageForm::default(), Outcome::Sent),
        Err(AppError::Validation(e)) => {
            tracing::debug!(error = %e, "Contact form rejected");
            (StatusCode::BAD_REQUEST, form, Outcome::Failed)
        }
        Err(e) => return Err(e),
    };

    Ok((
        status,
        ContactTemplate {
            i18n: page.i18n(),
            layout: page.layout(),
            form,
            outcome: Some(outcome),
        },
    )
        .into_response())
}

/// Accept a JSON contact message.
#[instrument(skip(state, form))]
pub async fn submit_json(
    State(state): State<AppState>,
    Json(form): Json<MessageForm>,
) -> (StatusCode, Json<MessageResponse>) {
    match store_message(&state, &form).await {
        Ok(_) => (
            StatusCode::OK,
            Json(MessageResponse::Sent {
                success: true,
                message: "Message sent successfully".to_owned(),
            }),
        ),
        Err(AppError::Validation(ValidationError::Required { .. })) => (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::error("All fields are required")),
        ),
        Err(AppError::Validation(e)) => (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::error(e.to_string())),
        ),
        Err(e) => {
            let event_id = sentry::capture_error(&e);
            tracing::error!(error = %e, sentry_event_id = %event_id, "Failed to store message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::error("Failed to send message")),
            )
        }
    }
}
