//! OpenAI-compatible chat-completions client for generated boss content.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use yokai_domain::GeneratedYokai;

use crate::infrastructure::ports::{ContentError, YokaiContentPort};

/// Default OpenAI base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model for yokai generation.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";

/// Requests closer together than this are rejected as rate limited.
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(5);

const DEFAULT_PROMPT: &str = "Create a unique yokai for a community RPG battle game";

const SYSTEM_PROMPT: &str = r#"You are an expert in Japanese mythology and folklore. Generate a unique yokai (supernatural creature) with authentic Japanese cultural elements. Return ONLY valid JSON in this exact format:
{
  "name": "English name",
  "nameJP": "Japanese name in hiragana/katakana/kanji",
  "description": "Brief description for gameplay",
  "backstory": "Rich mythological background",
  "imageUrl": "placeholder-image-url",
  "hp": 150000,
  "defense": 20,
  "attackPattern": [15, 20, 18, 25, 22]
}"#;

/// Client for any OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiYokaiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    last_request: Mutex<Option<Instant>>,
}

impl OpenAiYokaiClient {
    pub fn new(api_key: &str, base_url: &str, model: &str) -> Self {
        Self::with_timeout(api_key, base_url, model, 60)
    }

    /// Create client with custom timeout (for testing).
    pub fn with_timeout(api_key: &str, base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            last_request: Mutex::new(None),
        }
    }

    /// Claim the request slot, or fail if the previous request was too recent.
    async fn claim_slot(&self) -> Result<(), ContentError> {
        let mut last = self.last_request.lock().await;
        let now = Instant::now();
        if let Some(previous) = *last {
            if now.duration_since(previous) < MIN_REQUEST_INTERVAL {
                return Err(ContentError::RateLimited);
            }
        }
        *last = Some(now);
        Ok(())
    }
}

#[async_trait]
impl YokaiContentPort for OpenAiYokaiClient {
    async fn generate(&self, prompt: Option<String>) -> Result<GeneratedYokai, ContentError> {
        self.claim_slot().await?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
                },
            ],
            temperature: 0.8,
            max_tokens: 500,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ContentError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ContentError::RequestFailed(format!("{}: {}", status, error_text)));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ContentError::InvalidResponse(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ContentError::InvalidResponse("No content in response".to_string()))?;

        parse_yokai_content(&content)
    }
}

/// Parse the model's reply into a validated payload.
///
/// Accepts the JSON bare or wrapped in a markdown code fence.
pub fn parse_yokai_content(content: &str) -> Result<GeneratedYokai, ContentError> {
    let trimmed = content.trim();
    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    let yokai: GeneratedYokai =
        serde_json::from_str(json).map_err(|e| ContentError::InvalidResponse(e.to_string()))?;

    if yokai.name_jp.trim().is_empty() {
        return Err(ContentError::InvalidResponse(
            "Generated yokai has no Japanese name".to_string(),
        ));
    }
    yokai
        .validate()
        .map_err(|e| ContentError::InvalidResponse(e.to_string()))?;
    Ok(yokai)
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
