//! Google Gemini `generateContent` client
//!
//! Blocking (ureq); callers that must stay responsive run it on a worker
//! thread.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::prompt::{explain_prompt, system_instruction};
use super::{AssistantError, ConceptExplainer};
use crate::config::AssistantSettings;

// ============================================================================
// API Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl Content {
    fn text(role: Option<&str>, text: String) -> Self {
        Self {
            role: role.map(String::from),
            parts: vec![Part { text: Some(text) }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Concatenate the text parts of the first candidate
fn response_text(response: GenerateResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

/// Keep credentials and internals out of error messages shown in logs
fn sanitize_api_error(message: &str) -> String {
    let lower = message.to_lowercase();
    if lower.contains("api key") || lower.contains("permission denied") {
        return "API authentication error. Please check your API key configuration.".to_string();
    }
    if lower.contains("quota") || lower.contains("resource_exhausted") {
        return "API rate limit exceeded. Please try again later.".to_string();
    }
    if message.chars().count() > 300 {
        let truncated: String = message.chars().take(300).collect();
        format!("{}...(truncated)", truncated)
    } else {
        message.to_string()
    }
}

// ============================================================================
// Client
// ============================================================================

/// Gemini client used by the concept assistant
#[derive(Clone)]
pub struct GeminiClient {
    api_key: Option<String>,
    base_url: String,
    model: String,
    language: String,
    agent: ureq::Agent,
}

// Custom Debug to keep the API key out of logs
impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("language", &self.language)
            .finish()
    }
}

impl GeminiClient {
    pub fn from_settings(settings: &AssistantSettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build();

        Self {
            api_key: settings.resolved_api_key(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            language: settings.language.clone(),
            agent,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(&self, concept: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content::text(
                Some("user"),
                explain_prompt(concept, &self.language),
            )],
            system_instruction: Some(Content::text(None, system_instruction(&self.language))),
        }
    }
}

impl ConceptExplainer for GeminiClient {
    #[instrument(skip(self), fields(model = %self.model))]
    fn explain_concept(&self, concept: &str) -> Result<String, AssistantError> {
        let api_key = self.api_key.as_deref().ok_or(AssistantError::MissingApiKey)?;
        let request = self.build_request(concept);

        debug!("Sending generateContent request");
        let response = self
            .agent
            .post(&self.endpoint())
            .set("Content-Type", "application/json")
            .set("x-goog-api-key", api_key)
            .send_json(&request);

        match response {
            Ok(resp) => {
                let body: GenerateResponse = resp
                    .into_json()
                    .map_err(|e| AssistantError::InvalidResponse(e.to_string()))?;
                Ok(response_text(body))
            }
            Err(ureq::Error::Status(status, resp)) => {
                let raw = resp.into_string().unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&raw)
                    .map(|e| e.error.message)
                    .unwrap_or(raw);
                Err(AssistantError::Http {
                    status,
                    message: sanitize_api_error(&message),
                })
            }
            Err(ureq::Error::Transport(t)) => Err(AssistantError::Transport(t.to_string())),
        }
    }
}
