//! Direct-to-provider implementation of the language operations.

use crate::config::Config;
use crate::entities::{AnalysisOutput, ModelTier};
use crate::llm::{GenerateConfig, LlmError, LlmTransport, strip_code_fence};
use crate::ops::{LanguageOps, prompts};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::instrument;

/// Model names per tier.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    fast: String,
    quality: String,
}

impl ModelCatalog {
    pub fn new(fast: impl Into<String>, quality: impl Into<String>) -> Self {
        Self {
            fast: fast.into(),
            quality: quality.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.model_for(ModelTier::Fast),
            config.model_for(ModelTier::Quality),
        )
    }

    pub fn for_tier(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast,
            ModelTier::Quality => &self.quality,
        }
    }
}

pub struct GeminiOps {
    transport: Arc<dyn LlmTransport>,
    models: ModelCatalog,
    target_language: String,
}

impl GeminiOps {
    pub fn new(
        transport: Arc<dyn LlmTransport>,
        models: ModelCatalog,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            models,
            target_language: target_language.into(),
        }
    }

    fn schema_config(&self, schema: Value, tier: ModelTier) -> GenerateConfig {
        GenerateConfig {
            response_schema: Some(schema),
            system_instruction: None,
            disable_thinking: tier == ModelTier::Fast,
        }
    }
}

fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "keyPoints": { "type": "ARRAY", "items": { "type": "STRING" } },
            "keyEntities": { "type": "ARRAY", "items": { "type": "STRING" } },
            "keywords": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["title", "summary", "keyPoints", "keyEntities", "keywords"]
    })
}

/// Same shape as the analysis schema minus `title`, which is never
/// translated.
fn translated_fields_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "keyPoints": { "type": "ARRAY", "items": { "type": "STRING" } },
            "keyEntities": { "type": "ARRAY", "items": { "type": "STRING" } },
            "keywords": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["summary", "keyPoints", "keyEntities", "keywords"]
    })
}

/// Fence-strips and parses a JSON reply, distinguishing unparseable text
/// from a parseable object missing required fields.
fn parse_json_reply(raw: &str, required: &'static [&'static str]) -> Result<Value, LlmError> {
    let stripped = strip_code_fence(raw);
    let value: Value = serde_json::from_str(&stripped)
        .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

    for field in required {
        if value.get(field).is_none_or(Value::is_null) {
            return Err(LlmError::IncompleteResponse { field });
        }
    }
    Ok(value)
}

const ANALYSIS_FIELDS: &[&str] = &["title", "summary", "keyPoints", "keyEntities", "keywords"];
const TRANSLATED_FIELDS: &[&str] = &["summary", "keyPoints", "keyEntities", "keywords"];

#[async_trait]
impl LanguageOps for GeminiOps {
    #[instrument(skip_all)]
    async fn detect_language(&self, sample: &str) -> Result<String, LlmError> {
        let prompt = prompts::detect_language(sample);
        let config = GenerateConfig {
            response_schema: None,
            system_instruction: None,
            disable_thinking: true,
        };
        let reply = self
            .transport
            .generate(self.models.for_tier(ModelTier::Fast), &prompt, &config)
            .await?;
        Ok(reply.trim().to_string())
    }

    #[instrument(skip_all, fields(tier = ?tier))]
    async fn analyze(
        &self,
        content_html: &str,
        tier: ModelTier,
    ) -> Result<AnalysisOutput, LlmError> {
        let prompt = prompts::analyze(content_html);
        let config = self.schema_config(analysis_schema(), tier);
        let reply = self
            .transport
            .generate(self.models.for_tier(tier), &prompt, &config)
            .await?;

        let value = parse_json_reply(&reply, ANALYSIS_FIELDS)?;
        serde_json::from_value(value).map_err(|e| LlmError::MalformedResponse(e.to_string()))
    }

    #[instrument(skip_all, fields(tier = ?tier))]
    async fn translate_analysis(
        &self,
        analysis: &AnalysisOutput,
        tier: ModelTier,
    ) -> Result<AnalysisOutput, LlmError> {
        // Only the translatable fields go to the model; the title rides
        // along locally.
        let fields = json!({
            "summary": analysis.summary,
            "keyPoints": analysis.key_points,
            "keyEntities": analysis.key_entities,
            "keywords": analysis.keywords,
        });
        let prompt = prompts::translate_analysis(&fields.to_string(), &self.target_language);
        let config = self.schema_config(translated_fields_schema(), tier);
        let reply = self
            .transport
            .generate(self.models.for_tier(tier), &prompt, &config)
            .await?;

        let mut value = parse_json_reply(&reply, TRANSLATED_FIELDS)?;
        value["title"] = json!(analysis.title);
        serde_json::from_value(value).map_err(|e| LlmError::MalformedResponse(e.to_string()))
    }

    #[instrument(skip_all, fields(tier = ?tier, content_chars = content_html.chars().count()))]
    async fn translate_content(
        &self,
        content_html: &str,
        tier: ModelTier,
    ) -> Result<String, LlmError> {
        let config = GenerateConfig {
            response_schema: None,
            system_instruction: Some(prompts::translate_content_instruction(
                &self.target_language,
            )),
            disable_thinking: tier == ModelTier::Fast,
        };
        let reply = self
            .transport
            .generate(self.models.for_tier(tier), content_html, &config)
            .await?;
        Ok(strip_code_fence(&reply))
    }

    #[instrument(skip_all)]
    async fn enhance_readability(&self, html: &str) -> Result<String, LlmError> {
        let config = GenerateConfig {
            response_schema: None,
            system_instruction: Some(prompts::enhance_instruction(&self.target_language)),
            disable_thinking: false,
        };
        let reply = self
            .transport
            .generate(self.models.for_tier(ModelTier::Fast), html, &config)
            .await?;

        let enhanced = strip_code_fence(&reply);
        // Cheap structural sanity check, not full validation.
        if enhanced.is_empty() || !enhanced.starts_with('<') {
            return Err(LlmError::InvalidOutput(
                "enhanced output is not an HTML fragment".to_string(),
            ));
        }
        Ok(enhanced)
    }
}
