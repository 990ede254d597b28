//! Proxied implementation of the language operations.
//!
//! Sends `{action, payload}` to the credential-hiding endpoint and unwraps
//! `{result}` / `{error}` envelopes. The provider credential never reaches
//! this side.

use crate::entities::{AnalysisOutput, ModelTier};
use crate::llm::LlmError;
use crate::ops::LanguageOps;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::instrument;

static PROXY_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(120))
        .build()
        .expect("Failed to build proxy HTTP client")
});

pub struct RemoteOps {
    endpoint: String,
}

impl RemoteOps {
    /// `endpoint` is the full URL of the proxy's POST route.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    #[instrument(skip(self, payload), fields(action = action))]
    async fn call(&self, action: &str, payload: Value) -> Result<Value, LlmError> {
        let response = PROXY_CLIENT
            .post(&self.endpoint)
            .json(&json!({ "action": action, "payload": payload }))
            .send()
            .await
            .map_err(LlmError::from_reqwest_error)?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("proxy call failed")
                .to_string();
            return Err(LlmError::Remote(message));
        }

        body.get("result")
            .cloned()
            .ok_or_else(|| LlmError::MalformedResponse("proxy reply missing result".to_string()))
    }
}

fn as_string(value: Value) -> Result<String, LlmError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| LlmError::MalformedResponse("expected a string result".to_string()))
}

#[async_trait]
impl LanguageOps for RemoteOps {
    async fn detect_language(&self, sample: &str) -> Result<String, LlmError> {
        let result = self
            .call("detectLanguage", json!({ "sample": sample }))
            .await?;
        as_string(result)
    }

    async fn analyze(
        &self,
        content_html: &str,
        tier: ModelTier,
    ) -> Result<AnalysisOutput, LlmError> {
        let result = self
            .call(
                "performAnalysis",
                json!({ "content": content_html, "tier": tier }),
            )
            .await?;
        serde_json::from_value(result).map_err(|e| LlmError::MalformedResponse(e.to_string()))
    }

    async fn translate_analysis(
        &self,
        analysis: &AnalysisOutput,
        tier: ModelTier,
    ) -> Result<AnalysisOutput, LlmError> {
        let result = self
            .call(
                "translateAnalysis",
                json!({ "analysis": analysis, "tier": tier }),
            )
            .await?;
        serde_json::from_value(result).map_err(|e| LlmError::MalformedResponse(e.to_string()))
    }

    async fn translate_content(
        &self,
        content_html: &str,
        tier: ModelTier,
    ) -> Result<String, LlmError> {
        let result = self
            .call(
                "performTranslation",
                json!({ "content": content_html, "tier": tier }),
            )
            .await?;
        as_string(result)
    }

    async fn enhance_readability(&self, html: &str) -> Result<String, LlmError> {
        let result = self
            .call("enhanceReadability", json!({ "content": html }))
            .await?;
        as_string(result)
    }
}
