//! Hosted chat-completion client.
//!
//! `ChatCompletion` is the seam the orchestrator depends on; tests
//! substitute fakes per call. `OpenRouterClient` is the production
//! implementation, one stateless HTTP POST per request with no retry —
//! any failure is reported upward and absorbed by the fallback chain.

use serde::{Deserialize, Serialize};

use super::HostedCallError;
use crate::config::AnalysisConfig;

/// One chat-completion request: a system instruction plus a user prompt.
#[derive(Debug, Clone)]
pub struct ChatRequest<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Seam for the hosted chat-completion endpoint.
pub trait ChatCompletion {
    /// Issue one request and return the reply's textual content.
    fn complete(&self, request: &ChatRequest<'_>) -> Result<String, HostedCallError>;
}

/// HTTP client for the OpenRouter chat-completions API.
pub struct OpenRouterClient {
    endpoint: String,
    api_key: String,
    model: String,
    referrer_url: String,
    site_name: String,
    client: reqwest::blocking::Client,
}

impl OpenRouterClient {
    /// Build a client from configuration. The API key may be empty; the
    /// orchestrator never issues requests when the mode selector says
    /// offline, so an unusable client is never exercised.
    pub fn new(config: &AnalysisConfig) -> Self {
        // No timeout here: transport-level defaults apply.
        let client = reqwest::blocking::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
            model: config.model.clone(),
            referrer_url: config.referrer_url.clone(),
            site_name: config.site_name.clone(),
            client,
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Error body shape the API returns on non-2xx: `{"error":{"message":...}}`.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn categorize_status(status: u16, body: &str) -> HostedCallError {
    match status {
        401 => HostedCallError::Unauthorized,
        402 => HostedCallError::InsufficientBalance,
        429 => HostedCallError::RateLimited,
        _ => {
            let message = serde_json::from_str::<ApiErrorBody>(body)
                .ok()
                .and_then(|b| b.error)
                .map(|e| e.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            HostedCallError::Api { status, message }
        }
    }
}

impl ChatCompletion for OpenRouterClient {
    fn complete(&self, request: &ChatRequest<'_>) -> Result<String, HostedCallError> {
        let body = CompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: request.system,
                },
                Message {
                    role: "user",
                    content: request.user,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referrer_url)
            .header("X-Title", &self.site_name)
            .json(&body)
            .send()
            .map_err(|e| HostedCallError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(categorize_status(status.as_u16(), &body));
        }

        let parsed: CompletionResponse = response
            .json()
            .map_err(|e| HostedCallError::Network(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(HostedCallError::EmptyContent)
    }
}
