//! Web server for the Lawgorithm platform.
//!
//! Serves the nine screens as plain HTML:
//! - Landing, login, and registration for visitors
//! - Dashboard, document simplifier, and profile for signed-in members
//! - Lawyer directory, IPC catalog, and case guide for everyone
//! - Admin panel for the admin role

mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::analysis::{AnalyzerConfig, DocumentAnalyzer};
use crate::config::Settings;
use crate::repository::{
    IpcCatalog, LawyerDirectory, PlatformContent, StaticIpcCatalog, StaticLawyerDirectory,
};
use crate::session::SessionProvider;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionProvider>,
    pub lawyers: Arc<dyn LawyerDirectory>,
    pub ipc: Arc<dyn IpcCatalog>,
    pub content: Arc<PlatformContent>,
    pub analyzer: Arc<DocumentAnalyzer>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let analyzer = DocumentAnalyzer::new(AnalyzerConfig {
            delay: Duration::from_millis(settings.analysis_delay_ms),
            max_document_bytes: settings.max_document_bytes,
        });

        Self {
            session: Arc::new(SessionProvider::new()),
            lawyers: Arc::new(StaticLawyerDirectory::new()),
            ipc: Arc::new(StaticIpcCatalog::new()),
            content: Arc::new(PlatformContent::new()),
            analyzer: Arc::new(analyzer),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
