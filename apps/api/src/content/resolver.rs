//! Content Resolver: asks the generation service for copy and falls back to
//! canned content on any failure.
//!
//! The resolver never fails: every path ends in displayable content. What it
//! reports alongside the content is *where it came from*, so callers can show
//! a degraded-mode notice.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::content::fallback::resolve_fallback;
use crate::models::content::{
    ErrorBody, GenerateContentRequest, GenerateContentResponse, GeneratedContent,
};
use crate::targeting::TargetingSelection;

/// Notice shown when the service answered with its own degraded content.
pub const DEGRADED_NOTICE: &str =
    "Using offline content. Add OpenAI API key for AI-generated content.";

// ────────────────────────────────────────────────────────────────────────────
// Error taxonomy
// ────────────────────────────────────────────────────────────────────────────

/// Why the generation service could not supply content. Every variant is
/// absorbed by the resolver; none is fatal.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("no response within {}s", .0.as_secs_f32())]
    Timeout(Duration),

    #[error("{0}")]
    Failed(String),
}

impl GenerationError {
    /// Classifies an error message from the service, the way its clients do:
    /// by substring, with the HTTP status as a tiebreaker.
    pub fn classify(status: Option<u16>, message: &str) -> Self {
        let lower = message.to_lowercase();
        let message = message.to_string();
        if lower.contains("not configured") {
            GenerationError::Configuration(message)
        } else if lower.contains("api key") || status == Some(401) {
            GenerationError::Auth(message)
        } else if lower.contains("quota") || lower.contains("limit") || status == Some(429) {
            GenerationError::RateLimited(message)
        } else {
            GenerationError::Failed(message)
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::Configuration(_) => "CONFIGURATION",
            GenerationError::Auth(_) => "AUTH",
            GenerationError::RateLimited(_) => "RATE_LIMIT",
            GenerationError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            GenerationError::Timeout(_) => "TIMEOUT",
            GenerationError::Failed(_) => "FAILURE",
        }
    }

    /// User-facing wording for the notice banner.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Configuration(_) => {
                "AI generation is not configured. Showing built-in content.".to_string()
            }
            GenerationError::Auth(_) => {
                "The AI service rejected its API key. Showing built-in content.".to_string()
            }
            GenerationError::RateLimited(_) => {
                "The AI service quota is exhausted. Showing built-in content.".to_string()
            }
            GenerationError::MalformedResponse(_)
            | GenerationError::Timeout(_)
            | GenerationError::Failed(_) => {
                format!("Failed to generate content ({self}). Showing built-in content.")
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentOrigin {
    /// The service generated the copy.
    Generated,
    /// The service answered but flagged its own fallback content.
    Degraded,
    /// The service failed; copy comes from the local canned tables.
    LocalFallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub code: String,
    pub message: String,
}

/// Outcome of `ContentResolver::resolve`. `content` is always complete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub content: GeneratedContent,
    pub origin: ContentOrigin,
    pub notice: Option<Notice>,
}

impl Resolution {
    pub fn is_degraded(&self) -> bool {
        self.origin != ContentOrigin::Generated
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content sources
// ────────────────────────────────────────────────────────────────────────────

/// A backend able to answer the content-generation contract.
///
/// Carried in `ContentResolver` as `Arc<dyn ContentSource>`; swapped at startup
/// via `CONTENT_SERVICE_URL`.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError>;

    /// Backend name, for logs.
    fn name(&self) -> &'static str;
}

/// Calls a generation endpoint over HTTP.
pub struct RemoteContentSource {
    client: Client,
    url: String,
}

impl RemoteContentSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url,
        })
    }
}

#[async_trait]
impl ContentSource for RemoteContentSource {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::Failed(format!("request to content service failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Failed(format!("reading response failed: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("Failed to generate content (status {status})"));
            return Err(GenerationError::classify(Some(status.as_u16()), &message));
        }

        serde_json::from_str(&body).map_err(|e| GenerationError::MalformedResponse(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolver
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ContentResolver {
    source: Arc<dyn ContentSource>,
    timeout: Duration,
}

impl ContentResolver {
    pub fn new(source: Arc<dyn ContentSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Resolves content for a triple. Never fails.
    pub async fn resolve(&self, selection: &TargetingSelection) -> Resolution {
        let request = GenerateContentRequest::from(selection);

        let outcome = match tokio::time::timeout(self.timeout, self.source.generate(&request)).await
        {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout(self.timeout)),
        };

        match outcome.and_then(validate_response) {
            Ok(response) if response.fallback => {
                warn!(
                    "Content service ({}) returned degraded content for {}/{}/{}: {}",
                    self.source.name(),
                    request.profile.as_str(),
                    request.industry,
                    request.role.as_str(),
                    response.error.as_deref().unwrap_or("no reason given")
                );
                Resolution {
                    content: response.content,
                    origin: ContentOrigin::Degraded,
                    notice: Some(Notice {
                        code: "DEGRADED".to_string(),
                        message: DEGRADED_NOTICE.to_string(),
                    }),
                }
            }
            Ok(response) => {
                info!(
                    "Generated content for {}/{}/{} via {}",
                    request.profile.as_str(),
                    request.industry,
                    request.role.as_str(),
                    self.source.name()
                );
                Resolution {
                    content: response.content,
                    origin: ContentOrigin::Generated,
                    notice: None,
                }
            }
            Err(e) => {
                warn!(
                    "Content generation failed ({}), using canned content: {e}",
                    e.code()
                );
                Resolution {
                    content: resolve_fallback(selection),
                    origin: ContentOrigin::LocalFallback,
                    notice: Some(Notice {
                        code: e.code().to_string(),
                        message: e.user_message(),
                    }),
                }
            }
        }
    }
}

/// A success-shaped response with an empty section is as unusable as a missing one.
fn validate_response(
    response: GenerateContentResponse,
) -> Result<GenerateContentResponse, GenerationError> {
    match response.content.first_empty_section() {
        Some(section) => Err(GenerationError::MalformedResponse(format!(
            "'{section}' is empty"
        ))),
        None => Ok(response),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::targeting::{Industry, Profile, Role};

    /// Scripted source for resolver and router tests.
    pub(crate) enum StubSource {
        Respond(GenerateContentResponse),
        Fail(fn() -> GenerationError),
        Hang,
    }

    #[async_trait]
    impl ContentSource for StubSource {
        async fn generate(
            &self,
            _request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, GenerationError> {
            match self {
                StubSource::Respond(response) => Ok(response.clone()),
                StubSource::Fail(make) => Err(make()),
                StubSource::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Err(GenerationError::Failed("unreachable".to_string()))
                }
            }
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    pub(crate) fn sample_content() -> GeneratedContent {
        GeneratedContent {
            headlines: vec!["H1".into(), "H2".into(), "H3".into()],
            pain_points: vec!["P1".into(), "P2".into(), "P3".into(), "P4".into()],
            benefits: vec!["B1".into(), "B2".into(), "B3".into()],
            ctas: vec!["C1".into(), "C2".into(), "C3".into()],
        }
    }

    fn resolver(source: StubSource) -> ContentResolver {
        ContentResolver::new(Arc::new(source), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_success_passes_content_through() {
        let r = resolver(StubSource::Respond(GenerateContentResponse::generated(
            sample_content(),
        )));
        let resolution = r.resolve(&TargetingSelection::default()).await;
        assert_eq!(resolution.origin, ContentOrigin::Generated);
        assert_eq!(resolution.content, sample_content());
        assert!(resolution.notice.is_none());
        assert!(!resolution.is_degraded());
    }

    #[tokio::test]
    async fn test_degraded_response_is_accepted_with_notice() {
        let r = resolver(StubSource::Respond(GenerateContentResponse::degraded(
            sample_content(),
            "Using fallback content due to API error",
        )));
        let resolution = r.resolve(&TargetingSelection::default()).await;
        assert_eq!(resolution.origin, ContentOrigin::Degraded);
        assert_eq!(resolution.content, sample_content());
        assert_eq!(resolution.notice.unwrap().message, DEGRADED_NOTICE);
    }

    #[tokio::test]
    async fn test_failure_uses_local_fallback() {
        let r = resolver(StubSource::Fail(|| {
            GenerationError::Failed("connection refused".to_string())
        }));
        let selection = TargetingSelection::default();
        let resolution = r.resolve(&selection).await;
        assert_eq!(resolution.origin, ContentOrigin::LocalFallback);
        assert_eq!(resolution.content, resolve_fallback(&selection));
        assert_eq!(resolution.notice.unwrap().code, "FAILURE");
    }

    #[tokio::test]
    async fn test_each_error_category_has_distinct_notice() {
        let makers: [fn() -> GenerationError; 3] = [
            || GenerationError::Configuration("OpenAI API key not configured.".into()),
            || GenerationError::Auth("Invalid OpenAI API key.".into()),
            || GenerationError::RateLimited("quota exceeded".into()),
        ];
        let mut messages = Vec::new();
        for make in makers {
            let resolution = resolver(StubSource::Fail(make))
                .resolve(&TargetingSelection::default())
                .await;
            assert_eq!(resolution.origin, ContentOrigin::LocalFallback);
            messages.push(resolution.notice.unwrap().message);
        }
        messages.dedup();
        assert_eq!(messages.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_section_is_treated_as_malformed() {
        let mut content = sample_content();
        content.ctas.clear();
        let r = resolver(StubSource::Respond(GenerateContentResponse::generated(content)));
        let selection = TargetingSelection {
            profile: Profile::Large,
            industry: Industry::Wholesale,
            role: Role::User,
        };
        let resolution = r.resolve(&selection).await;
        assert_eq!(resolution.origin, ContentOrigin::LocalFallback);
        assert_eq!(resolution.notice.unwrap().code, "MALFORMED_RESPONSE");
        assert_eq!(resolution.content, resolve_fallback(&selection));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_falls_back() {
        let r = ContentResolver::new(Arc::new(StubSource::Hang), Duration::from_secs(5));
        let resolution = r.resolve(&TargetingSelection::default()).await;
        assert_eq!(resolution.origin, ContentOrigin::LocalFallback);
        assert_eq!(resolution.notice.unwrap().code, "TIMEOUT");
        assert_eq!(resolution.content.pain_points.len(), 4);
    }

    #[test]
    fn test_classify_by_substring() {
        assert!(matches!(
            GenerationError::classify(Some(500), "OpenAI API key not configured. Please add it."),
            GenerationError::Configuration(_)
        ));
        assert!(matches!(
            GenerationError::classify(Some(401), "Invalid OpenAI API key. Please check your configuration."),
            GenerationError::Auth(_)
        ));
        assert!(matches!(
            GenerationError::classify(Some(429), "OpenAI API quota exceeded."),
            GenerationError::RateLimited(_)
        ));
        assert!(matches!(
            GenerationError::classify(None, "Rate limit reached"),
            GenerationError::RateLimited(_)
        ));
        assert!(matches!(
            GenerationError::classify(Some(502), "bad gateway"),
            GenerationError::Failed(_)
        ));
    }

    #[test]
    fn test_classify_falls_back_to_status() {
        assert!(matches!(
            GenerationError::classify(Some(401), "unauthorized"),
            GenerationError::Auth(_)
        ));
        assert!(matches!(
            GenerationError::classify(Some(429), "slow down"),
            GenerationError::RateLimited(_)
        ));
    }
}
