use axum::{
    routing::{get, post},
    Router,
};
use completion_client::{CompletionClient, HuggingFaceClient};
use configuration::{Config, DefaultInputs};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub defaults: DefaultInputs,
    /// `None` when no assistant token is configured; `/api/ask` then answers 503.
    pub assistant: Option<Arc<dyn CompletionClient>>,
}

impl AppState {
    /// Builds the state from configuration, disabling the assistant if it has no token.
    pub fn from_config(config: &Config) -> Self {
        let assistant = match HuggingFaceClient::new(&config.assistant) {
            Ok(client) => Some(Arc::new(client) as Arc<dyn CompletionClient>),
            Err(e) => {
                tracing::warn!(error = %e, "Assistant disabled.");
                None
            }
        };

        Self {
            defaults: config.defaults.clone(),
            assistant,
        }
    }
}

/// Defines the application routes over the given state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/defaults", get(handlers::get_defaults))
        .route("/api/formulas", get(handlers::get_formulas))
        .route("/api/kpis", post(handlers::compute_kpis))
        .route("/api/ask", post(handlers::ask_assistant))
        .with_state(Arc::new(state))
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    // Tracing is initialised by the caller.
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = router(AppState::from_config(config));

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
