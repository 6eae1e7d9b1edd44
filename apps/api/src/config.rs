use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_API_URL;

const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 5;

/// Application configuration loaded from environment variables.
/// Nothing is required: without an API key generation degrades to canned content.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_api_url: String,
    /// Remote generation endpoint; the in-process generator is used when unset.
    pub content_service_url: Option<String>,
    pub generation_timeout: Duration,
    /// Save/Export webhook; designs are only logged when unset.
    pub design_sink_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_api_url: optional_env("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            content_service_url: optional_env("CONTENT_SERVICE_URL"),
            generation_timeout: parse_generation_timeout(
                optional_env("GENERATION_TIMEOUT_SECS").as_deref(),
            )?,
            design_sink_url: optional_env("DESIGN_SINK_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Whole seconds, at least 1. A zero timeout would fail every generation.
fn parse_generation_timeout(value: Option<&str>) -> Result<Duration> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS));
    };
    let secs = value
        .parse::<u64>()
        .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?;
    if secs == 0 {
        bail!("GENERATION_TIMEOUT_SECS must be at least 1");
    }
    Ok(Duration::from_secs(secs))
}

/// Unset and blank values both count as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_api_url: DEFAULT_API_URL.to_string(),
            content_service_url: None,
            generation_timeout: Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS),
            design_sink_url: None,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_timeout_defaults_and_parses() {
        assert_eq!(parse_generation_timeout(None).unwrap(), Duration::from_secs(5));
        assert_eq!(parse_generation_timeout(Some("12")).unwrap(), Duration::from_secs(12));
    }

    #[test]
    fn test_generation_timeout_rejects_zero_and_garbage() {
        let err = parse_generation_timeout(Some("0")).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
        assert!(parse_generation_timeout(Some("soon")).is_err());
        assert!(parse_generation_timeout(Some("-3")).is_err());
    }
}
