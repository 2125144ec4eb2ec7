//! Axum route handler for the objective suggestion flow.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::editor::controller;
use crate::editor::handlers::get_session;
use crate::errors::AppError;
use crate::models::document::Document;
use crate::state::AppState;
use crate::suggest::experience_summary;

#[derive(Debug, Serialize)]
pub struct SuggestObjectiveResponse {
    pub document: Document,
    /// All returned options, in model order. Only the first one is applied.
    pub suggestions: Vec<String>,
}

/// POST /api/v1/sessions/:id/suggest-objective
///
/// Asks the suggestion service for objective options and applies the first
/// one. Precondition: the desired job title must be filled in; rejected
/// before any call otherwise. A failure leaves the Document unchanged.
pub async fn handle_suggest_objective(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuggestObjectiveResponse>, AppError> {
    let session = get_session(&state, id).await?;
    let snapshot = session.snapshot().await;

    if snapshot.personal_info.job_title.trim().is_empty() {
        return Err(AppError::Validation(
            "Por favor, preencha o 'Cargo Desejado' primeiro.".to_string(),
        ));
    }

    let _guard = session
        .try_begin_suggestion()
        .ok_or(AppError::InFlight("suggestion"))?;

    let summary = experience_summary(&snapshot.experience);
    let suggestions = state
        .suggest
        .generate_objective_suggestions(&snapshot.personal_info.job_title, &summary)
        .await?;

    // Apply only after the collaborator succeeded; the Document is never
    // partially mutated by a failed call.
    let mut doc = session.document.write().await;
    let next = match suggestions.first() {
        Some(first) => controller::set_objective(&doc, first.clone()),
        None => doc.clone(),
    };
    *doc = next.clone();
    drop(doc);

    Ok(Json(SuggestObjectiveResponse {
        document: next,
        suggestions,
    }))
}
