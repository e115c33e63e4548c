//! Portfolio server implementation.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use folio_carousel::CarouselTiming;
use folio_content::{ContentPayload, RequestKind, TemplateEngine, TemplateError};

use crate::assets::asset_response;

/// Host the server binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the server binds to.
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration for the portfolio server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory image requests resolve against
    pub base_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_dir: PathBuf::from("."),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Server error: {0}")]
    ServeError(String),

    #[error("Failed to render page: {0}")]
    RenderError(#[from] TemplateError),
}

/// Shared, read-only state for request handlers.
pub struct AppState {
    base_dir: PathBuf,
    page: Bytes,
}

impl AppState {
    /// Render the page document once for the lifetime of the server.
    pub fn new(base_dir: PathBuf, payload: &ContentPayload) -> Result<Self, ServerError> {
        let page = TemplateEngine::new().render_document(payload, &CarouselTiming::default())?;

        Ok(Self {
            base_dir,
            page: Bytes::from(page),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn page(&self) -> &Bytes {
        &self.page
    }
}

/// Build the router. There is no routing table: every request goes through
/// the asset/page split.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(handle_request)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn handle_request(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    match RequestKind::classify(uri.path()) {
        RequestKind::Asset => asset_response(&state.base_dir, uri.path()).await,
        RequestKind::Page => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            state.page.clone(),
        )
            .into_response(),
    }
}

/// Local portfolio server.
pub struct PortfolioServer {
    config: ServerConfig,
}

impl PortfolioServer {
    /// Create a new portfolio server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind the configured address and serve until the process ends.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        self.serve(listener).await
    }

    /// Serve on an already-bound listener.
    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        let state = Arc::new(AppState::new(
            self.config.base_dir.clone(),
            ContentPayload::portfolio(),
        )?);
        let app = create_router(state);

        let addr = listener
            .local_addr()
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        tracing::info!("Server running at http://{}/", addr);

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        Ok(())
    }
}
