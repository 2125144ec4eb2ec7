#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;
use crate::payment::PaymentError;
use crate::render::RenderError;
use crate::suggest::SuggestError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Collaborator failures surface as retryable notices with generic
/// user-facing messages; details go to the log. No variant ever leaves a
/// Document partially mutated.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payment required")]
    PaymentRequired,

    #[error("Operation already in flight: {0}")]
    InFlight(&'static str),

    #[error("Suggestion error: {0}")]
    Suggestion(#[from] SuggestError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Payment gate error: {0}")]
    Payment(#[from] PaymentError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PaymentRequired => (
                StatusCode::PAYMENT_REQUIRED,
                "PAYMENT_REQUIRED",
                "O download do PDF requer pagamento confirmado.".to_string(),
            ),
            AppError::InFlight(op) => {
                tracing::warn!("Duplicate {op} request rejected while one is pending");
                (
                    StatusCode::CONFLICT,
                    "REQUEST_IN_FLIGHT",
                    "Já existe uma operação em andamento. Aguarde a conclusão.".to_string(),
                )
            }
            AppError::Suggestion(e) => {
                tracing::error!("Suggestion error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SUGGESTION_ERROR",
                    "Falha ao gerar sugestões. Tente novamente.".to_string(),
                )
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXPORT_ERROR",
                    "Erro ao gerar PDF. Tente novamente.".to_string(),
                )
            }
            AppError::Payment(e) => {
                tracing::error!("Payment gate error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PAYMENT_ERROR",
                    "Não foi possível verificar o pagamento. Tente novamente.".to_string(),
                )
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "Erro ao montar a visualização do currículo.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
