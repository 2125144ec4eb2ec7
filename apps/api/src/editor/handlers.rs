//! Axum route handlers for the session and document editing API.
//!
//! Every mutation locks the session's Document, applies a copy-on-write
//! controller operation and returns the updated Document value.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editor::commands::{ConfigUpdate, EducationUpdate, ExperienceUpdate, PersonalUpdate};
use crate::editor::controller;
use crate::errors::AppError;
use crate::models::catalog::{TemplateDescriptor, ThemeColor, TEMPLATES, THEME_COLORS};
use crate::models::document::Document;
use crate::session::Session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub document: Document,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: Document,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetTarget {
    Empty,
    Example,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub target: ResetTarget,
    /// Destructive-action contract: the reset only applies when the caller
    /// has collected an explicit confirmation from the user.
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub templates: &'static [TemplateDescriptor],
    pub colors: &'static [ThemeColor],
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

pub(crate) async fn get_session(state: &AppState, id: Uuid) -> Result<Arc<Session>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// Applies a copy-on-write operation under the session's Document lock.
async fn mutate<F>(state: &AppState, id: Uuid, op: F) -> Result<Json<DocumentResponse>, AppError>
where
    F: FnOnce(&Document) -> Document,
{
    let session = get_session(state, id).await?;
    let mut doc = session.document.write().await;
    let next = op(&doc);
    *doc = next.clone();
    Ok(Json(DocumentResponse { document: next }))
}

// ────────────────────────────────────────────────────────────────────────────
// Session lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Creates a new editing session holding an all-empty Document.
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.sessions.create().await;
    let document = session.snapshot().await;
    Json(SessionResponse {
        session_id: session.id,
        created_at: session.created_at,
        document,
    })
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    let session = get_session(&state, id).await?;
    Ok(Json(DocumentResponse {
        document: session.snapshot().await,
    }))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// GET /api/v1/catalog
///
/// Read-only design catalog: template descriptors and the curated palette.
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        templates: TEMPLATES,
        colors: THEME_COLORS,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Field updates
// ────────────────────────────────────────────────────────────────────────────

/// PATCH /api/v1/sessions/:id/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<PersonalUpdate>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, |doc| controller::apply_personal(doc, update)).await
}

/// PATCH /api/v1/sessions/:id/config
pub async fn handle_update_config(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ConfigUpdate>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, |doc| controller::apply_config(doc, update)).await
}

/// PUT /api/v1/sessions/:id/objective
pub async fn handle_set_objective(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TextRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, |doc| controller::set_objective(doc, request.text)).await
}

/// PUT /api/v1/sessions/:id/skills
///
/// Replaces the skill list wholesale from comma-separated text.
pub async fn handle_set_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TextRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, |doc| {
        controller::set_skills_from_text(doc, &request.text)
    })
    .await
}

/// POST /api/v1/sessions/:id/reset
///
/// Replaces the whole Document (empty or example), preserving the current
/// Configuration. Rejected without the explicit confirmation flag.
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ResetRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    if !request.confirm {
        return Err(AppError::Validation(
            "A redefinição substitui os dados atuais. Envie confirm=true para continuar."
                .to_string(),
        ));
    }
    mutate(&state, id, |doc| match request.target {
        ResetTarget::Empty => controller::reset_to_empty(doc),
        ResetTarget::Example => controller::reset_to_example(doc),
    })
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Photo
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/photo
///
/// Multipart upload; the first image field becomes the document photo,
/// stored as a self-contained data URL.
pub async fn handle_attach_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<DocumentResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Upload inválido: {e}")))?
    {
        let Some(mime) = field.content_type().map(str::to_string) else {
            continue;
        };
        if !mime.starts_with("image/") {
            return Err(AppError::Validation(
                "O arquivo enviado não é uma imagem.".to_string(),
            ));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Upload inválido: {e}")))?;
        return mutate(&state, id, |doc| {
            controller::attach_photo(doc, &bytes, &mime)
        })
        .await;
    }
    Err(AppError::Validation("Nenhuma imagem enviada.".to_string()))
}

/// DELETE /api/v1/sessions/:id/photo
pub async fn handle_clear_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, controller::clear_photo).await
}

// ────────────────────────────────────────────────────────────────────────────
// Experience list
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, controller::add_experience).await
}

/// PATCH /api/v1/sessions/:id/experience/:entry_id
///
/// Unknown entry ids are a silent no-op by contract.
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    Json(update): Json<ExperienceUpdate>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, |doc| {
        controller::update_experience(doc, entry_id, update)
    })
    .await
}

/// DELETE /api/v1/sessions/:id/experience/:entry_id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, |doc| controller::remove_experience(doc, entry_id)).await
}

/// POST /api/v1/sessions/:id/experience/sort
///
/// One-shot recency sort; insertion order stays authoritative otherwise.
pub async fn handle_sort_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, controller::sort_experience).await
}

// ────────────────────────────────────────────────────────────────────────────
// Education list
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, controller::add_education).await
}

/// PATCH /api/v1/sessions/:id/education/:entry_id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    Json(update): Json<EducationUpdate>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, |doc| {
        controller::update_education(doc, entry_id, update)
    })
    .await
}

/// DELETE /api/v1/sessions/:id/education/:entry_id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, |doc| controller::remove_education(doc, entry_id)).await
}

/// POST /api/v1/sessions/:id/education/sort
pub async fn handle_sort_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    mutate(&state, id, controller::sort_education).await
}

// ────────────────────────────────────────────────────────────────────────────
// Preview
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/sessions/:id/preview
///
/// The current Document rendered through the selected template, recomputed
/// on every request.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let session = get_session(&state, id).await?;
    let doc = session.snapshot().await;
    let html = state.renderer.render(&doc)?;
    Ok(Html(html))
}
