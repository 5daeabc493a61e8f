mod analysis;
mod config;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ProviderKind};
use crate::llm_client::{DeepseekClient, GeminiClient, JsonGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the LLM backend selected by configuration
    let llm: Arc<dyn JsonGenerator> = match config.provider {
        ProviderKind::Deepseek => {
            info!("LLM backend: Deepseek (model: {})", llm_client::deepseek::MODEL);
            Arc::new(DeepseekClient::new(config.api_key.clone()))
        }
        ProviderKind::Gemini => {
            info!("LLM backend: Gemini (model: {})", llm_client::gemini::MODEL);
            Arc::new(GeminiClient::new(config.api_key.clone()))
        }
    };

    let cors = build_cors_layer(&config)?;

    let state = AppState {
        llm,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer: wildcard unless `ALLOWED_ORIGIN` pins a single
/// origin, in which case only cross-origin POST (plus preflight) is allowed.
fn build_cors_layer(config: &Config) -> Result<CorsLayer> {
    let layer = match &config.allowed_origin {
        None => CorsLayer::permissive(),
        Some(origin) => {
            let origin = origin.parse::<HeaderValue>().with_context(|| {
                format!("ALLOWED_ORIGIN '{origin}' is not a valid header value")
            })?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers(Any)
        }
    };
    Ok(layer)
}
