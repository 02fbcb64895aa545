use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use valq_core::errors::ProviderError;
use valq_core::provider::{GenerationInstruction, TextModel};

const API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";
const BODY_SNIPPET_LEN: usize = 200;

/// OpenRouter connection settings, read from the environment.
///
/// A missing API key does not fail construction: the service is expected to
/// come up without credentials and serve from the fallback bank, so the key
/// is only checked when a completion is actually attempted.
#[derive(Clone)]
pub struct OpenRouterConfig {
    pub api_key: Option<SecretString>,
    pub model: String,
    pub app_name: String,
    pub site_url: String,
}

impl OpenRouterConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env_trimmed("OPENROUTER_API_KEY").map(SecretString::from),
            model: env_trimmed("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            app_name: env_trimmed("OPENROUTER_APP_NAME").unwrap_or_else(|| "valq".to_string()),
            site_url: env_trimmed("OPENROUTER_SITE_URL")
                .unwrap_or_else(|| "http://localhost:5173".to_string()),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Chat-completions client for OpenRouter.
pub struct OpenRouterModel {
    client: reqwest::Client,
    config: OpenRouterConfig,
}

impl OpenRouterModel {
    pub fn new(config: OpenRouterConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(OpenRouterConfig::from_env())
    }
}

#[async_trait]
impl TextModel for OpenRouterModel {
    fn name(&self) -> &str {
        "openrouter"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(
        &self,
        instruction: &GenerationInstruction,
    ) -> Result<String, ProviderError> {
        let Some(api_key) = &self.config.api_key else {
            return Err(ProviderError::MissingCredential("OPENROUTER_API_KEY"));
        };

        let body = ChatCompletionRequest {
            model: &self.config.model,
            temperature: instruction.temperature,
            max_tokens: instruction.max_tokens,
            messages: vec![
                ChatMessage { role: "system", content: &instruction.system },
                ChatMessage { role: "user", content: &instruction.user },
            ],
            response_format: ResponseFormat { kind: "json_object" },
        };

        debug!(
            model = %self.config.model,
            user_len = instruction.user.len(),
            "POST {API_URL}"
        );

        let response = self
            .client
            .post(API_URL)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", api_key.expose_secret()),
            )
            .header("HTTP-Referer", &self.config.site_url)
            .header("X-Title", &self.config.app_name)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body: snippet(&text),
            });
        }

        let envelope: ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::Malformed(format!(
                "decode error: {e}; expected `choices[0].message.content`"
            ))
        })?;

        envelope
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::Malformed("no content in choices".to_string()))
    }
}

fn snippet(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= BODY_SNIPPET_LEN {
        trimmed.to_string()
    } else {
        trimmed.chars().take(BODY_SNIPPET_LEN).collect::<String>() + "..."
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}
