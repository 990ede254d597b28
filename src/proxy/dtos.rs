use crate::entities::{AnalysisOutput, ModelTier};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct DetectLanguagePayload {
    pub sample: String,
}

#[derive(Deserialize)]
pub struct PerformAnalysisPayload {
    pub content: String,
    #[serde(default)]
    pub tier: ModelTier,
}

#[derive(Deserialize)]
pub struct TranslateAnalysisPayload {
    pub analysis: AnalysisOutput,
    #[serde(default)]
    pub tier: ModelTier,
}

#[derive(Deserialize)]
pub struct PerformTranslationPayload {
    pub content: String,
    #[serde(default)]
    pub tier: ModelTier,
}

#[derive(Deserialize)]
pub struct EnhanceReadabilityPayload {
    pub content: String,
}

#[derive(Serialize)]
pub struct ResultResponse<T: Serialize> {
    pub result: T,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
