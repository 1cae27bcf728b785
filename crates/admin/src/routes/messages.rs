//! Contact message inbox.

use askama::Template;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use hartna_core::{I18n, Message, MessageId};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::routes::render;
use crate::state::AppState;
use crate::views::{AdminPage, FlashParams, Layout, flash};

/// Message card for templates.
#[derive(Debug, Clone)]
pub struct MessageView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub body: String,
    pub received: String,
}

impl MessageView {
    fn new(message: &Message, i18n: I18n) -> Self {
        Self {
            id: message.id.to_string(),
            name: message.full_name(),
            email: message.email.to_string(),
            phone: message.phone.clone(),
            subject: message.subject.clone(),
            body: message.message.clone(),
            received: i18n.digits(&message.timestamp.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}

/// Messages page template.
#[derive(Template)]
#[template(path = "messages.html")]
pub struct MessagesTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub messages: Vec<MessageView>,
}

/// Messages page handler. Newest first.
#[instrument(skip(_admin, state, page))]
pub async fn index(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>> {
    let messages = state
        .store()
        .messages()
        .await?
        .iter()
        .rev()
        .map(|m| MessageView::new(m, page.i18n))
        .collect();

    render(&MessagesTemplate {
        i18n: page.i18n,
        layout: page.layout(&params),
        messages,
    })
}

/// Delete a message.
#[instrument(skip(_admin, state))]
pub async fn delete(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    if !state.store().delete_message(&MessageId::new(id.as_str())).await? {
        return Ok(Redirect::to(&format!("/messages?error={}", flash::NOT_FOUND)));
    }

    tracing::info!(message_id = %id, "Message deleted");
    Ok(Redirect::to(&format!("/messages?success={}", flash::DELETED)))
}

/// Stored messages as JSON, oldest first.
#[instrument(skip(_admin, state))]
pub async fn api_index(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>> {
    Ok(Json(state.store().messages().await?))
}
