use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::content::ContentResolver;
use crate::design::export::DesignSink;
use crate::design::session::DesignSession;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one live design. Never held across an await on generation.
    pub session: Arc<RwLock<DesignSession>>,
    pub resolver: ContentResolver,
    /// Backs `/api/generate-content`. `None` when no API key is configured.
    pub llm: Option<LlmClient>,
    /// Pluggable Save/Export target. Default: LoggingDesignSink. Swap via DESIGN_SINK_URL.
    pub sink: Arc<dyn DesignSink>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        resolver: ContentResolver,
        llm: Option<LlmClient>,
        sink: Arc<dyn DesignSink>,
        config: Config,
    ) -> Self {
        Self {
            session: Arc::new(RwLock::new(DesignSession::default())),
            resolver,
            llm,
            sink,
            config,
        }
    }
}
