mod config;
mod editor;
mod errors;
mod export;
mod models;
mod payment;
mod render;
mod routes;
mod session;
mod state;
mod suggest;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::{ExportService, HttpExportService};
use crate::payment::{PaymentGate, SimulatedPixGate};
use crate::render::TemplateRenderer;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;
use crate::suggest::SuggestClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CurriculoExpress API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the suggestion client
    let suggest = SuggestClient::new(config.gemini_api_key.clone());
    info!("Suggestion client initialized (model: {})", suggest::MODEL);

    // Initialize the export collaborator
    let export: Arc<dyn ExportService> =
        Arc::new(HttpExportService::new(config.export_service_url.clone()));
    info!("Export service client initialized ({})", config.export_service_url);

    // Initialize the simulated payment gate
    let payment: Arc<dyn PaymentGate> = Arc::new(SimulatedPixGate::new(
        std::time::Duration::from_millis(config.payment_delay_ms),
    ));
    info!(
        "Simulated payment gate initialized ({}ms delay)",
        config.payment_delay_ms
    );

    // Compile the layout templates once
    let renderer = Arc::new(TemplateRenderer::new());
    info!("Template renderer initialized (modern, classic, minimal)");

    // Build app state
    let state = AppState {
        sessions: SessionStore::new(),
        suggest,
        export,
        payment,
        renderer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
