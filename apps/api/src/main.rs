mod config;
mod content;
mod design;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;
mod targeting;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::content::resolver::RemoteContentSource;
use crate::content::{ContentResolver, ContentSource};
use crate::design::export::{DesignSink, LoggingDesignSink, WebhookDesignSink, SINK_TIMEOUT};
use crate::generation::generator::InProcessContentSource;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Designer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (optional: generation degrades without a key)
    let llm = match &config.openai_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), config.openai_api_url.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            warn!("OPENAI_API_KEY not set; content generation will use fallback copy");
            None
        }
    };

    // Content source: remote service when configured, otherwise the in-process generator
    let source: Arc<dyn ContentSource> = match &config.content_service_url {
        Some(url) => Arc::new(RemoteContentSource::new(
            url.clone(),
            config.generation_timeout,
        )?),
        None => Arc::new(InProcessContentSource::new(llm.clone())),
    };
    let resolver = ContentResolver::new(source, config.generation_timeout);
    info!(
        "Content resolver using {} source ({}s timeout)",
        resolver.source_name(),
        config.generation_timeout.as_secs()
    );

    // Save/Export sink (LoggingDesignSink by default; swap via DESIGN_SINK_URL)
    let sink: Arc<dyn DesignSink> = match &config.design_sink_url {
        Some(url) => {
            info!("Design sink: webhook {url}");
            Arc::new(WebhookDesignSink::new(url.clone(), SINK_TIMEOUT)?)
        }
        None => Arc::new(LoggingDesignSink),
    };

    let state = AppState::new(resolver, llm, sink, config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
