//! Export collaborator: turns the rendered page into a downloadable PDF.
//!
//! The rasterizer is external; this module owns only the request contract
//! and the download filename rules. The captured content is always the
//! canonical renderer output at full fidelity, never a scaled preview.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub mod handlers;

/// Capture density multiplier, matching the preview-quality requirement
/// of a printable A4 page.
const CAPTURE_SCALE: u8 = 3;

const DEFAULT_FILENAME_STEM: &str = "Novo";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Export service error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Rasterizes a rendered HTML page into a single-file paginated PDF.
/// Carried in `AppState` as `Arc<dyn ExportService>`.
#[async_trait]
pub trait ExportService: Send + Sync {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}

#[derive(Debug, Serialize)]
struct ExportRequest<'a> {
    html: &'a str,
    format: &'static str,
    scale: u8,
    background: &'static str,
}

/// HTTP-backed export service posting the page to a rasterizer endpoint.
pub struct HttpExportService {
    client: Client,
    endpoint: String,
}

impl HttpExportService {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl ExportService for HttpExportService {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        let request = ExportRequest {
            html,
            format: "A4",
            scale: CAPTURE_SCALE,
            background: "#ffffff",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ExportError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        debug!("Export succeeded: {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

/// Download filename derived from the person's full name: non-alphanumeric
/// runs collapse to single underscores; a blank name falls back to the
/// default stem.
pub fn export_filename(full_name: &str) -> String {
    let mut stem = String::new();
    for c in full_name.trim().chars() {
        if c.is_alphanumeric() {
            stem.push(c);
        } else if !stem.ends_with('_') && !stem.is_empty() {
            stem.push('_');
        }
    }
    let stem = stem.trim_end_matches('_');
    if stem.is_empty() {
        format!("CV_{DEFAULT_FILENAME_STEM}.pdf")
    } else {
        format!("CV_{stem}.pdf")
    }
}
