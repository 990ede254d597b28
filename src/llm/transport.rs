//! The opaque LLM call interface and its Gemini implementation.

use crate::llm::error::LlmError;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::instrument;

static LLM_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(120))
        .build()
        .expect("Failed to build LLM HTTP client")
});

/// Per-call generation options.
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Fixed JSON response schema; the reply is requested as
    /// `application/json` when present.
    pub response_schema: Option<Value>,
    /// Free-form system instruction for instruction-only calls.
    pub system_instruction: Option<String>,
    /// Disables the model's extended reasoning budget (fast tier).
    pub disable_thinking: bool,
}

/// One opaque text-in/text-out model call.
#[async_trait]
pub trait LlmTransport: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        config: &GenerateConfig,
    ) -> Result<String, LlmError>;
}

/// Direct `generateContent` calls against the Gemini API. Holds the
/// provider credential; only ever constructed server-side of the proxy
/// boundary.
pub struct GeminiTransport {
    base_url: String,
    api_key: String,
}

impl GeminiTransport {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn request_body(prompt: &str, config: &GenerateConfig) -> Value {
        let mut generation_config = json!({});
        if let Some(schema) = &config.response_schema {
            generation_config["responseMimeType"] = json!("application/json");
            generation_config["responseSchema"] = schema.clone();
        }
        if config.disable_thinking {
            generation_config["thinkingConfig"] = json!({ "thinkingBudget": 0 });
        }

        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": generation_config,
        });
        if let Some(instruction) = &config.system_instruction {
            body["systemInstruction"] = json!({ "parts": [{ "text": instruction }] });
        }
        body
    }

    fn response_text(value: &Value) -> Result<String, LlmError> {
        let parts = value
            .pointer("/candidates/0/content/parts")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                LlmError::MalformedResponse("no candidates in provider response".to_string())
            })?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect();

        if text.is_empty() {
            return Err(LlmError::MalformedResponse(
                "candidate contained no text parts".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl LlmTransport for GeminiTransport {
    #[instrument(skip_all, fields(model = model, prompt_chars = prompt.chars().count()))]
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        config: &GenerateConfig,
    ) -> Result<String, LlmError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        );

        let response = LLM_CLIENT
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::request_body(prompt, config))
            .send()
            .await
            .map_err(LlmError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Http { status, body });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
        Self::response_text(&value)
    }
}
