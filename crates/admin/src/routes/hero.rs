//! Hero slider management.

use askama::Template;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use hartna_core::{HeroSlide, HeroSlideForm, HeroSlideUpdate, I18n, NewHeroSlide, SlideId};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::routes::render;
use crate::services::{MultipartForm, StagedImage, read_multipart};
use crate::state::AppState;
use crate::views::{AdminPage, FlashParams, Layout, flash};

/// Slide row for templates.
#[derive(Debug, Clone)]
pub struct SlideRow {
    pub id: String,
    pub position: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub link: String,
}

impl SlideRow {
    fn new(index: usize, slide: &HeroSlide, i18n: I18n) -> Self {
        let language = i18n.language();
        Self {
            id: slide.id.to_string(),
            position: i18n.digits(&(index + 1).to_string()),
            title: slide.localized_title(language).to_owned(),
            subtitle: slide.localized_subtitle(language).to_owned(),
            image: slide.image.clone(),
            link: slide.cta_link().to_owned(),
        }
    }
}

/// Slides list with the new slide form.
#[derive(Template)]
#[template(path = "hero/index.html")]
pub struct HeroIndexTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub slides: Vec<SlideRow>,
    pub form: HeroSlideForm,
}

/// Edit slide form.
#[derive(Template)]
#[template(path = "hero/edit.html")]
pub struct HeroEditTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub slide_id: String,
    pub form: HeroSlideForm,
}

fn slide_form(fields: &MultipartForm) -> HeroSlideForm {
    HeroSlideForm {
        title: fields.text("title"),
        title_ar: fields.text("titleAr"),
        subtitle: fields.text("subtitle"),
        subtitle_ar: fields.text("subtitleAr"),
        image: fields.text("image"),
        cta: fields.text("cta"),
        cta_ar: fields.text("ctaAr"),
        link: fields.text("link"),
    }
}

fn form_for(slide: &HeroSlide) -> HeroSlideForm {
    HeroSlideForm {
        title: slide.title.clone(),
        title_ar: slide.title_ar.clone(),
        subtitle: slide.subtitle.clone(),
        subtitle_ar: slide.subtitle_ar.clone(),
        image: slide.image.clone(),
        cta: slide.cta.clone(),
        cta_ar: slide.cta_ar.clone(),
        link: slide.link.clone().unwrap_or_default(),
    }
}

/// Read the submitted form; an uploaded image replaces the image URL.
async fn read_slide_form(
    state: &AppState,
    multipart: Multipart,
) -> Result<(HeroSlideForm, Option<StagedImage>)> {
    let config = state.config();
    let mut fields = read_multipart(multipart, config.max_upload_bytes).await?;
    let staged = fields
        .take_image()
        .map(|image| StagedImage::new(image, &config.uploads_dir))
        .transpose()?;

    let mut form = slide_form(&fields);
    if let Some(staged) = &staged {
        staged.public_path().clone_into(&mut form.image);
    }
    Ok((form, staged))
}

async fn index_page(
    state: &AppState,
    page: &AdminPage,
    layout: Layout,
    form: HeroSlideForm,
) -> Result<Html<String>> {
    let slides = state
        .store()
        .hero_slides()
        .await?
        .iter()
        .enumerate()
        .map(|(i, slide)| SlideRow::new(i, slide, page.i18n))
        .collect();

    render(&HeroIndexTemplate {
        i18n: page.i18n,
        layout,
        slides,
        form,
    })
}

/// Hero slider page handler.
#[instrument(skip(_admin, state, page))]
pub async fn index(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>> {
    let layout = page.layout(&params);
    index_page(&state, &page, layout, HeroSlideForm::default()).await
}

/// Add a slide at the end of the slider.
#[instrument(skip(_admin, state, page, multipart))]
pub async fn create(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    multipart: Multipart,
) -> Result<Response> {
    let (form, staged) = read_slide_form(&state, multipart).await?;

    let slide = match NewHeroSlide::validate(&form) {
        Ok(slide) => slide,
        Err(e) => {
            let layout = page.layout_with_error(e.to_string());
            let html = index_page(&state, &page, layout, form).await?;
            return Ok((StatusCode::BAD_REQUEST, html).into_response());
        }
    };

    if let Some(staged) = staged {
        staged.persist().await?;
    }
    let slide = state.store().add_hero_slide(slide).await?;

    add_breadcrumb("catalog", &format!("Created slide {}", slide.id));
    tracing::info!(slide_id = %slide.id, "Hero slide created");
    Ok(Redirect::to(&format!("/hero-slider?success={}", flash::SAVED)).into_response())
}

/// Edit slide form.
#[instrument(skip(_admin, state, page))]
pub async fn edit(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let slide = state
        .store()
        .hero_slide(&SlideId::new(id.as_str()))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("slide {id}")))?;

    render(&HeroEditTemplate {
        i18n: page.i18n,
        layout: page.layout(&FlashParams::default()),
        slide_id: id,
        form: form_for(&slide),
    })
}

/// Replace a slide's content.
#[instrument(skip(_admin, state, page, multipart))]
pub async fn update(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Response> {
    let slide_id = SlideId::new(id.as_str());
    if state.store().hero_slide(&slide_id).await?.is_none() {
        return Err(AppError::NotFound(format!("slide {id}")));
    }

    let (form, staged) = read_slide_form(&state, multipart).await?;
    let slide = match NewHeroSlide::validate(&form) {
        Ok(slide) => slide,
        Err(e) => {
            let template = HeroEditTemplate {
                i18n: page.i18n,
                layout: page.layout_with_error(e.to_string()),
                slide_id: id,
                form,
            };
            return Ok((StatusCode::BAD_REQUEST, render(&template)?).into_response());
        }
    };

    if let Some(staged) = staged {
        staged.persist().await?;
    }
    if !state
        .store()
        .update_hero_slide(&slide_id, HeroSlideUpdate::from(slide))
        .await?
    {
        return Err(AppError::NotFound(format!("slide {id}")));
    }

    add_breadcrumb("catalog", &format!("Updated slide {id}"));
    tracing::info!(slide_id = %id, "Hero slide updated");
    Ok(Redirect::to(&format!("/hero-slider?success={}", flash::SAVED)).into_response())
}

/// Delete a slide.
#[instrument(skip(_admin, state))]
pub async fn delete(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    if !state
        .store()
        .delete_hero_slide(&SlideId::new(id.as_str()))
        .await?
    {
        return Ok(Redirect::to(&format!("/hero-slider?error={}", flash::NOT_FOUND)));
    }

    add_breadcrumb("catalog", &format!("Deleted slide {id}"));
    tracing::info!(slide_id = %id, "Hero slide deleted");
    Ok(Redirect::to(&format!("/hero-slider?success={}", flash::DELETED)))
}
