mod completion;
mod config;
mod errors;
mod interview;
mod routes;
mod state;
mod styles;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::completion::OpenAiClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::styles::StyleTable;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mockmate API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the completion provider
    let provider = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));
    info!("Completion client initialized (model: {})", completion::MODEL);

    // Build the company style table
    let styles = Arc::new(StyleTable::builtin());

    // Build app state
    let state = AppState {
        provider,
        styles,
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
