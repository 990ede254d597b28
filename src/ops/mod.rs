//! The five language operations behind one interface.
//!
//! Declared once, implemented twice: [`GeminiOps`] talks to the provider
//! directly (credential in hand, used by the proxy binary and any trusted
//! environment), [`RemoteOps`] goes through the credential-hiding proxy
//! endpoint. Pipeline code only ever sees the trait, so the two call paths
//! cannot diverge.

pub mod gemini;
pub mod prompts;
pub mod remote;

pub use gemini::{GeminiOps, ModelCatalog};
pub use remote::RemoteOps;

use crate::entities::{AnalysisOutput, ModelTier};
use crate::llm::LlmError;
use async_trait::async_trait;

#[async_trait]
pub trait LanguageOps: Send + Sync {
    /// Classifies a text sample; the reply is expected to be a two-letter
    /// ISO 639-1 code but is returned raw. Coercion policy lives with the
    /// caller (`detector`).
    async fn detect_language(&self, sample: &str) -> Result<String, LlmError>;

    /// Produces title/summary/key-points/entities/keywords for sanitized
    /// HTML content, in the content's own language.
    async fn analyze(
        &self,
        content_html: &str,
        tier: ModelTier,
    ) -> Result<AnalysisOutput, LlmError>;

    /// Translates the analysis string fields into the target display
    /// language. The returned record carries the original title unchanged.
    async fn translate_analysis(
        &self,
        analysis: &AnalysisOutput,
        tier: ModelTier,
    ) -> Result<AnalysisOutput, LlmError>;

    /// Translates visible text inside the HTML, leaving markup untouched.
    /// Best-effort: the output is used verbatim, without structural
    /// validation.
    async fn translate_content(
        &self,
        content_html: &str,
        tier: ModelTier,
    ) -> Result<String, LlmError>;

    /// Reformats already-translated HTML for presentation. Fails with
    /// `InvalidOutput` if the reply is empty or does not begin with a tag.
    async fn enhance_readability(&self, html: &str) -> Result<String, LlmError>;
}
