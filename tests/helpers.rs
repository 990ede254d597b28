use std::sync::Arc;

use linguascope::llm::GeminiTransport;
use linguascope::ops::{GeminiOps, LanguageOps, ModelCatalog};
use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FAST_MODEL: &str = "test-flash";
pub const QUALITY_MODEL: &str = "test-pro";

/// Direct language ops wired to a wiremock stand-in for the provider.
pub fn gemini_ops(server: &MockServer) -> Arc<dyn LanguageOps> {
    let transport = Arc::new(GeminiTransport::new(server.uri(), "test-key"));
    Arc::new(GeminiOps::new(
        transport,
        ModelCatalog::new(FAST_MODEL, QUALITY_MODEL),
        "ko",
    ))
}

/// A provider reply whose single candidate contains `text`.
pub fn candidate_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    }))
}

/// Mounts a generateContent mock matched by a marker string present in the
/// request body (each operation's prompt carries a distinct phrase).
pub async fn mount_generate(server: &MockServer, body_marker: &str, reply: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/v1beta/models/[^/]+:generateContent$"))
        .and(body_string_contains(body_marker))
        .respond_with(reply)
        .mount(server)
        .await;
}

pub fn analysis_json() -> Value {
    json!({
        "title": "Sample Article",
        "summary": "One line about the article.",
        "keyPoints": ["first point", "second point", "third point"],
        "keyEntities": ["Acme Corp"],
        "keywords": ["sample", "article"]
    })
}
