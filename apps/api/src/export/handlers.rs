//! Axum route handlers for payment and PDF download.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::editor::handlers::get_session;
use crate::errors::AppError;
use crate::export::export_filename;
use crate::payment::{self, PaymentOutcome};
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PaymentInfoResponse {
    pub pix_key: &'static str,
    pub price: String,
    pub qr_code_url: String,
    pub paid: bool,
}

/// GET /api/v1/sessions/:id/payment
///
/// The data the payment dialog needs: Pix key, price and QR image URL.
pub async fn handle_payment_info(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentInfoResponse>, AppError> {
    let session = get_session(&state, id).await?;
    Ok(Json(PaymentInfoResponse {
        pix_key: payment::PIX_KEY,
        price: payment::price_display(),
        qr_code_url: payment::qr_code_url(),
        paid: session.paid(),
    }))
}

/// POST /api/v1/sessions/:id/payment/confirm
///
/// Runs the payment gate; on the session's first confirmation the export
/// triggers automatically exactly once and the PDF is streamed back.
pub async fn handle_confirm_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = get_session(&state, id).await?;
    if session.paid() {
        return Err(AppError::Validation(
            "O pagamento desta sessão já foi confirmado.".to_string(),
        ));
    }

    let _guard = session
        .try_begin_payment()
        .ok_or(AppError::InFlight("payment"))?;

    match state.payment.confirm().await? {
        PaymentOutcome::Confirmed => {
            if session.mark_paid() {
                run_export(&state, &session).await
            } else {
                Err(AppError::Validation(
                    "O pagamento desta sessão já foi confirmado.".to_string(),
                ))
            }
        }
        PaymentOutcome::Cancelled => Err(AppError::Validation("Pagamento cancelado.".to_string())),
    }
}

/// POST /api/v1/sessions/:id/export
///
/// Paid-only download of the current Document as an A4 PDF.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = get_session(&state, id).await?;
    if !session.paid() {
        return Err(AppError::PaymentRequired);
    }

    let _guard = session
        .try_begin_export()
        .ok_or(AppError::InFlight("export"))?;

    run_export(&state, &session).await
}

/// Renders the full-fidelity page and hands it to the export collaborator.
/// Reads a Document snapshot only; a failure leaves the session untouched.
async fn run_export(state: &AppState, session: &Session) -> Result<Response, AppError> {
    let doc = session.snapshot().await;
    let html = state.renderer.render(&doc)?;
    let pdf = state.export.render_pdf(&html).await?;
    let filename = export_filename(&doc.personal_info.full_name);

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (header::CONTENT_DISPOSITION, content_disposition(&filename)),
    ];
    Ok((headers, pdf).into_response())
}

/// Header-safe disposition: plain quoting for ASCII names, RFC 5987
/// percent-encoding otherwise (accented Brazilian names are common).
fn content_disposition(filename: &str) -> String {
    if filename.is_ascii() {
        format!("attachment; filename=\"{filename}\"")
    } else {
        let encoded: String = filename
            .bytes()
            .map(|b| match b {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'_' | b'-' => {
                    (b as char).to_string()
                }
                _ => format!("%{b:02X}"),
            })
            .collect();
        format!("attachment; filename*=UTF-8''{encoded}")
    }
}
