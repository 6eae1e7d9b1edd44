//! Save/Export hand-off. The real persistence and rendering backends live
//! outside this service; `DesignSink` is the seam they plug into.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::models::design::DesignConfig;

pub const SINK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkAction {
    Save,
    Export,
}

impl SinkAction {
    fn past_tense(self) -> &'static str {
        match self {
            SinkAction::Save => "saved",
            SinkAction::Export => "exported",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SinkReceipt {
    pub action: SinkAction,
    pub message: String,
    pub acknowledged_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("design sink unavailable: {0}")]
    Unavailable(String),

    #[error("design rejected: {0}")]
    Rejected(String),
}

/// Receives full designs on Save/Export. Carried in `AppState` as `Arc<dyn DesignSink>`.
#[async_trait]
pub trait DesignSink: Send + Sync {
    async fn accept(
        &self,
        action: SinkAction,
        design: &DesignConfig,
    ) -> Result<SinkReceipt, SinkError>;
}

/// Default sink: logs the design summary and acknowledges.
pub struct LoggingDesignSink;

#[async_trait]
impl DesignSink for LoggingDesignSink {
    async fn accept(
        &self,
        action: SinkAction,
        design: &DesignConfig,
    ) -> Result<SinkReceipt, SinkError> {
        info!(
            "Design {}: {} text, {} images, background {}, target {}/{}/{}",
            action.past_tense(),
            design.text_elements.len(),
            design.image_elements.len(),
            design.background_color,
            design.targeting.profile.as_str(),
            design.targeting.industry,
            design.targeting.role.as_str()
        );
        Ok(SinkReceipt {
            action,
            message: format!("Design {} successfully!", action.past_tense()),
            acknowledged_at: Utc::now(),
        })
    }
}

/// Forwards designs as JSON to an external persistence/rendering endpoint.
pub struct WebhookDesignSink {
    client: Client,
    url: String,
}

#[derive(Serialize)]
struct SinkPayload<'a> {
    action: SinkAction,
    design: &'a DesignConfig,
}

impl WebhookDesignSink {
    pub fn new(url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url,
        })
    }
}

#[async_trait]
impl DesignSink for WebhookDesignSink {
    async fn accept(
        &self,
        action: SinkAction,
        design: &DesignConfig,
    ) -> Result<SinkReceipt, SinkError> {
        let response = self
            .client
            .post(&self.url)
            .json(&SinkPayload { action, design })
            .send()
            .await
            .map_err(|e| SinkError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SinkError::Rejected(format!("status {status}: {body}")));
        }

        info!("Design {} via {}", action.past_tense(), self.url);
        Ok(SinkReceipt {
            action,
            message: format!("Design {} successfully!", action.past_tense()),
            acknowledged_at: Utc::now(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Sink that always refuses; used to exercise failure reporting.
    pub(crate) struct RejectingSink;

    #[async_trait]
    impl DesignSink for RejectingSink {
        async fn accept(
            &self,
            _action: SinkAction,
            _design: &DesignConfig,
        ) -> Result<SinkReceipt, SinkError> {
            Err(SinkError::Unavailable("storage offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_logging_sink_acknowledges_save_and_export() {
        let design = DesignConfig::default();
        let saved = LoggingDesignSink
            .accept(SinkAction::Save, &design)
            .await
            .unwrap();
        assert_eq!(saved.message, "Design saved successfully!");
        let exported = LoggingDesignSink
            .accept(SinkAction::Export, &design)
            .await
            .unwrap();
        assert_eq!(exported.action, SinkAction::Export);
        assert_eq!(exported.message, "Design exported successfully!");
    }

    #[tokio::test]
    async fn test_webhook_sink_unreachable_is_unavailable() {
        let sink =
            WebhookDesignSink::new("http://127.0.0.1:9/designs".to_string(), Duration::from_secs(2))
                .unwrap();
        let err = sink
            .accept(SinkAction::Export, &DesignConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SinkError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_rejecting_sink_reports_reason() {
        let err = RejectingSink
            .accept(SinkAction::Save, &DesignConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("storage offline"));
    }
}
