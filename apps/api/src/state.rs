use std::sync::Arc;

use crate::config::Config;
use crate::export::ExportService;
use crate::payment::PaymentGate;
use crate::render::TemplateRenderer;
use crate::session::SessionStore;
use crate::suggest::SuggestClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// All live editing sessions. Memory-only; nothing survives a restart.
    pub sessions: SessionStore,
    pub suggest: SuggestClient,
    /// Pluggable rasterizer collaborator. Default: HttpExportService.
    pub export: Arc<dyn ExportService>,
    /// Pluggable payment collaborator. Default: SimulatedPixGate.
    pub payment: Arc<dyn PaymentGate>,
    /// Compiled layout templates, built once at startup.
    pub renderer: Arc<TemplateRenderer>,
    pub config: Config,
}
