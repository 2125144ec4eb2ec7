#![allow(dead_code)]

//! Payment gate collaborator.
//!
//! The gate is opaque to the editor: it emits a confirm-or-cancel outcome
//! once per user-initiated "mark as paid" action. The shipped gate is a
//! simulation that confirms after a fixed delay; no real payment rails.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

/// Pix key shown to the user for the simulated charge.
pub const PIX_KEY: &str = "90b278a3-4ae5-45c6-a707-195acb7f1b67";

/// Price in centavos (R$ 12,00).
pub const PRICE_BRL_CENTS: u32 = 1200;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Payment gate unavailable: {0}")]
    Gate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Confirmed,
    Cancelled,
}

/// Carried in `AppState` as `Arc<dyn PaymentGate>`.
#[async_trait]
pub trait PaymentGate: Send + Sync {
    async fn confirm(&self) -> Result<PaymentOutcome, PaymentError>;
}

/// Simulated Pix verification: always confirms after a fixed delay.
pub struct SimulatedPixGate {
    delay: std::time::Duration,
}

impl SimulatedPixGate {
    pub fn new(delay: std::time::Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentGate for SimulatedPixGate {
    async fn confirm(&self) -> Result<PaymentOutcome, PaymentError> {
        tokio::time::sleep(self.delay).await;
        info!("Simulated Pix payment confirmed");
        Ok(PaymentOutcome::Confirmed)
    }
}

/// QR image URL encoding the Pix key, rendered by the payment dialog.
pub fn qr_code_url() -> String {
    format!("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data={PIX_KEY}")
}

/// Price formatted for display, Brazilian convention.
pub fn price_display() -> String {
    format!("R$ {},{:02}", PRICE_BRL_CENTS / 100, PRICE_BRL_CENTS % 100)
}
