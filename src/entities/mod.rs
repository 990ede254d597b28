//! Core data model: job inputs, status, analysis output and the terminal
//! user-facing result record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// How the user supplied content for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    Url,
    RawText,
}

/// Caller-selectable model configuration trading latency for quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    #[default]
    Fast,
    Quality,
}

/// Job lifecycle states. The derived `Ord` follows declaration order, which
/// is the only order a job is allowed to move through: no step is revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Queued,
    Extracting,
    DetectingLanguage,
    Analyzing,
    Translating,
    Completed,
    Failed,
}

impl Display for JobStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JobStatus::Queued => "queued",
            JobStatus::Extracting => "extracting",
            JobStatus::DetectingLanguage => "detecting-language",
            JobStatus::Analyzing => "analyzing",
            JobStatus::Translating => "translating",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// One user submission: what to analyze and with which model tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInput {
    pub mode: InputMode,
    pub value: String,
    #[serde(default)]
    pub tier: ModelTier,
}

/// Structured output of the analysis call. Immutable once returned; a
/// translated variant replaces it wholesale, carrying the title over
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutput {
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub key_entities: Vec<String>,
    pub keywords: Vec<String>,
}

/// Display-language output bundle of a completed job.
///
/// Invariant: `full_translation` always holds content in the target display
/// language -- the original content when no translation was needed, the
/// translated HTML otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputBundle {
    pub summary: String,
    pub key_points: Vec<String>,
    pub key_entities: Vec<String>,
    pub keywords: Vec<String>,
    pub full_translation: String,
}

/// Terminal record of a completed job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResult {
    pub title: String,
    /// Empty string when the input was raw text.
    pub source_url: String,
    /// Sanitized content in its original language.
    pub original_content: String,
    pub started_at: DateTime<Utc>,
    pub elapsed_secs: f64,
    pub outputs: OutputBundle,
}
