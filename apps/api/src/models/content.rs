use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::targeting::{Industry, Profile, Role, TargetingSelection};

/// Marketing copy for one targeting triple. All four lists are required; a
/// payload missing any of them fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub headlines: Vec<String>,
    pub pain_points: Vec<String>,
    pub benefits: Vec<String>,
    pub ctas: Vec<String>,
}

impl GeneratedContent {
    /// Name of the first empty list, if any.
    pub fn first_empty_section(&self) -> Option<&'static str> {
        [
            ("headlines", &self.headlines),
            ("painPoints", &self.pain_points),
            ("benefits", &self.benefits),
            ("ctas", &self.ctas),
        ]
        .into_iter()
        .find(|(_, items)| items.is_empty())
        .map(|(name, _)| name)
    }
}

/// Request body of the content-generation contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub profile: Profile,
    pub industry: Industry,
    pub role: Role,
}

impl From<&TargetingSelection> for GenerateContentRequest {
    fn from(selection: &TargetingSelection) -> Self {
        Self {
            profile: selection.profile,
            industry: selection.industry.clone(),
            role: selection.role,
        }
    }
}

/// Success (or degraded) response of the content-generation contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(flatten)]
    pub content: GeneratedContent,
    #[serde(
        default,
        deserialize_with = "deserialize_truthy",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateContentResponse {
    pub fn generated(content: GeneratedContent) -> Self {
        Self {
            content,
            fallback: false,
            error: None,
        }
    }

    pub fn degraded(content: GeneratedContent, error: impl Into<String>) -> Self {
        Self {
            content,
            fallback: true,
            error: Some(error.into()),
        }
    }
}

/// Body of a non-success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Accepts any JSON value for the `fallback` marker and reads it the way a
/// loosely typed client would: `false`, `0`, `""` and `null` are false.
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(extra: Value) -> Value {
        let mut base = json!({
            "headlines": ["a", "b", "c"],
            "painPoints": ["p1", "p2", "p3", "p4"],
            "benefits": ["x", "y", "z"],
            "ctas": ["go", "try", "see"]
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        base
    }

    #[test]
    fn test_success_response_ignores_diagnostic_fields() {
        let parsed: GenerateContentResponse =
            serde_json::from_value(body(json!({"model": "gpt", "latencyMs": 812}))).unwrap();
        assert!(!parsed.fallback);
        assert!(parsed.error.is_none());
        assert_eq!(parsed.content.pain_points.len(), 4);
    }

    #[test]
    fn test_degraded_marker_accepts_boolean_ish_values() {
        for marker in [json!(true), json!(1), json!("yes")] {
            let parsed: GenerateContentResponse =
                serde_json::from_value(body(json!({"fallback": marker, "error": "offline"})))
                    .unwrap();
            assert!(parsed.fallback);
            assert_eq!(parsed.error.as_deref(), Some("offline"));
        }
        for marker in [json!(false), json!(0), json!(""), Value::Null] {
            let parsed: GenerateContentResponse =
                serde_json::from_value(body(json!({"fallback": marker}))).unwrap();
            assert!(!parsed.fallback);
        }
    }

    #[test]
    fn test_missing_section_fails_to_parse() {
        let mut partial = body(json!({}));
        partial.as_object_mut().unwrap().remove("ctas");
        let result: Result<GenerateContentResponse, _> = serde_json::from_value(partial);
        assert!(result.is_err());
    }

    #[test]
    fn test_first_empty_section() {
        let mut content: GenerateContentResponse = serde_json::from_value(body(json!({}))).unwrap();
        assert_eq!(content.content.first_empty_section(), None);
        content.content.benefits.clear();
        assert_eq!(content.content.first_empty_section(), Some("benefits"));
    }

    #[test]
    fn test_generated_response_omits_fallback_fields() {
        let content: GenerateContentResponse = serde_json::from_value(body(json!({}))).unwrap();
        let json = serde_json::to_value(GenerateContentResponse::generated(content.content)).unwrap();
        assert!(json.get("fallback").is_none());
        assert!(json.get("error").is_none());
        assert!(json.get("painPoints").is_some());
    }

    #[test]
    fn test_request_from_selection() {
        let request = GenerateContentRequest::from(&TargetingSelection::default());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"profile": "small", "industry": "retail", "role": "champion"})
        );
    }
}
