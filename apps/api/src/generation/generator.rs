//! Marketing copy generation: the service behind `POST /api/generate-content`.
//!
//! Flow: build prompt → LLM call (JSON mode) → shape check → response.
//! Credential and quota failures are reported as errors; any other failure is
//! answered with generic canned copy flagged `fallback: true`.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::content::resolver::{ContentSource, GenerationError};
use crate::generation::prompts::MARKETING_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::content::{GenerateContentRequest, GenerateContentResponse, GeneratedContent};
use crate::models::design::TAGLINE;

pub const MISSING_KEY_MESSAGE: &str =
    "OpenAI API key not configured. Please add OPENAI_API_KEY to your environment.";
pub const INVALID_KEY_MESSAGE: &str = "Invalid OpenAI API key. Please check your configuration.";
pub const QUOTA_MESSAGE: &str = "OpenAI API quota exceeded. Please check your OpenAI account.";
pub const FALLBACK_MESSAGE: &str = "Using fallback content due to API error";

/// Generates copy for one targeting triple.
pub async fn generate_content(
    llm: Option<&LlmClient>,
    request: &GenerateContentRequest,
) -> Result<GenerateContentResponse, GenerationError> {
    let Some(llm) = llm else {
        return Err(GenerationError::Configuration(MISSING_KEY_MESSAGE.to_string()));
    };

    let prompt = build_prompt(request);

    match call_llm(llm, &prompt).await {
        Ok(content) => {
            info!(
                "LLM generated content for {}/{}/{}",
                request.profile.as_str(),
                request.industry,
                request.role.as_str()
            );
            Ok(GenerateContentResponse::generated(content))
        }
        Err(e) => {
            warn!("Error generating content: {e}");
            let message = e.to_string();
            let lower = message.to_lowercase();
            if lower.contains("api key") || e.status() == Some(401) {
                Err(GenerationError::Auth(INVALID_KEY_MESSAGE.to_string()))
            } else if lower.contains("quota") || lower.contains("limit") || e.status() == Some(429) {
                Err(GenerationError::RateLimited(QUOTA_MESSAGE.to_string()))
            } else {
                Ok(GenerateContentResponse::degraded(
                    generic_fallback(),
                    FALLBACK_MESSAGE,
                ))
            }
        }
    }
}

/// LLM call plus shape check. Errors carry the reason as text for classification.
async fn call_llm(llm: &LlmClient, prompt: &str) -> Result<GeneratedContent, CallError> {
    let content: GeneratedContent = llm.call_json(prompt, JSON_ONLY_SYSTEM).await?;
    if let Some(section) = content.first_empty_section() {
        return Err(CallError::InvalidStructure(section));
    }
    Ok(content)
}

#[derive(Debug, thiserror::Error)]
enum CallError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Invalid response structure from OpenAI: '{0}' is empty")]
    InvalidStructure(&'static str),
}

impl CallError {
    fn status(&self) -> Option<u16> {
        match self {
            CallError::Llm(e) => e.status(),
            CallError::InvalidStructure(_) => None,
        }
    }
}

pub fn build_prompt(request: &GenerateContentRequest) -> String {
    MARKETING_PROMPT_TEMPLATE
        .replace("{profile}", request.profile.as_str())
        .replace("{employee_range}", request.profile.employee_range())
        .replace("{industry}", &request.industry.display_name())
        .replace("{role}", request.role.prompt_description())
        .replace("{tagline}", TAGLINE)
}

/// Profile-agnostic copy returned when the model cannot be used.
pub fn generic_fallback() -> GeneratedContent {
    let owned =
        |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
    GeneratedContent {
        headlines: owned(&[
            "Streamline HR for your team",
            "Stop managing payroll with spreadsheets",
            "Simple HR tools that actually work",
        ]),
        pain_points: owned(&[
            "Manual timesheet calculations waste hours",
            "Payroll errors cause compliance issues",
            "Multiple systems don't talk to each other",
            "Scaling is painful without proper tools",
        ]),
        benefits: owned(&[
            "Automated payroll and tax compliance",
            "All-in-one HR platform",
            "24/7 expert support included",
        ]),
        ctas: owned(&["Start Free Trial", "Get a Demo", "See How It Works"]),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-process content source
// ────────────────────────────────────────────────────────────────────────────

/// Serves the resolver from this process, skipping the HTTP hop.
pub struct InProcessContentSource {
    llm: Option<LlmClient>,
}

impl InProcessContentSource {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ContentSource for InProcessContentSource {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        generate_content(self.llm.as_ref(), request).await
    }

    fn name(&self) -> &'static str {
        "in-process"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targeting::{Industry, Profile, Role};

    fn request() -> GenerateContentRequest {
        GenerateContentRequest {
            profile: Profile::Medium,
            industry: Industry::HomeServices,
            role: Role::DecisionMaker,
        }
    }

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Business Size: medium business (26-50 employees)"));
        assert!(prompt.contains("Industry: home services"));
        assert!(prompt.contains("Decision Maker (Owner/CEO)"));
        assert!(prompt.contains(TAGLINE));
        assert!(prompt.contains("for the home services industry"));
        assert!(!prompt.contains("{profile}"));
        assert!(!prompt.contains("{industry}"));
    }

    #[test]
    fn test_generic_fallback_shape() {
        let content = generic_fallback();
        assert_eq!(content.headlines.len(), 3);
        assert_eq!(content.pain_points.len(), 4);
        assert_eq!(content.benefits.len(), 3);
        assert_eq!(content.ctas.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let result = generate_content(None, &request()).await;
        match result {
            Err(GenerationError::Configuration(msg)) => assert_eq!(msg, MISSING_KEY_MESSAGE),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_in_process_source_without_key_reports_configuration() {
        let source = InProcessContentSource::new(None);
        let err = source.generate(&request()).await.unwrap_err();
        assert_eq!(err.code(), "CONFIGURATION");
        assert_eq!(source.name(), "in-process");
    }

    #[tokio::test]
    async fn test_unreachable_api_degrades_to_generic_fallback() {
        // Port 9 on localhost refuses connections; the transport error is not a
        // credential or quota problem, so the service answers with fallback copy.
        let llm = LlmClient::new("sk-test".to_string(), "http://127.0.0.1:9/v1".to_string())
            .unwrap();
        let response = generate_content(Some(&llm), &request()).await.unwrap();
        assert!(response.fallback);
        assert_eq!(response.error.as_deref(), Some(FALLBACK_MESSAGE));
        assert_eq!(response.content, generic_fallback());
    }
}
