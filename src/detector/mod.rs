//! Language detection with an availability-over-precision fallback policy.
//!
//! Mis-detection only costs an unnecessary translation pass, never data
//! loss, so ambiguous or failed classification is coerced instead of
//! failing the job.

use crate::normalizer;
use crate::ops::LanguageOps;
use regex::Regex;
use once_cell::sync::Lazy;
use tracing::warn;

/// Length of the tag-stripped sample sent for classification.
const SAMPLE_CHARS: usize = 1000;

/// Coercion target for replies not matching a two-letter code. English,
/// i.e. "needs translation".
const FALLBACK_CODE: &str = "en";

static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]{2}$").unwrap());

/// Classifies content into a two-letter language code. Never errors:
/// empty content short-circuits to the target language (skipping the model
/// call and the translation pass), and anything else the model or the
/// network does wrong coerces to [`FALLBACK_CODE`].
pub async fn detect(ops: &dyn LanguageOps, content_html: &str, target_language: &str) -> String {
    let text = normalizer::visible_text(content_html);
    let text = text.trim();
    if text.is_empty() {
        return target_language.to_string();
    }

    let sample: String = text.chars().take(SAMPLE_CHARS).collect();
    match ops.detect_language(&sample).await {
        Ok(reply) => coerce(&reply),
        Err(err) => {
            warn!(error = %err, "language detection failed, assuming '{FALLBACK_CODE}'");
            FALLBACK_CODE.to_string()
        }
    }
}

// Exactly two lowercase letters after trimming; no case folding, so an
// uppercase reply coerces rather than passing through.
fn coerce(reply: &str) -> String {
    let code = reply.trim();
    if CODE_RE.is_match(code) {
        code.to_string()
    } else {
        FALLBACK_CODE.to_string()
    }
}
