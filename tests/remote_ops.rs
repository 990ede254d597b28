//! The proxied implementation against a live dispatch endpoint: both call
//! paths share one interface, so results must match what the direct
//! implementation produced server-side.

use std::sync::Arc;

use async_trait::async_trait;
use linguascope::app_state::AppState;
use linguascope::entities::{AnalysisOutput, ModelTier};
use linguascope::llm::LlmError;
use linguascope::ops::{LanguageOps, RemoteOps};
use linguascope::proxy;

struct ServerSideOps;

#[async_trait]
impl LanguageOps for ServerSideOps {
    async fn detect_language(&self, _sample: &str) -> Result<String, LlmError> {
        Ok("fr".to_string())
    }

    async fn analyze(&self, _: &str, tier: ModelTier) -> Result<AnalysisOutput, LlmError> {
        Ok(AnalysisOutput {
            title: format!("analyzed with {tier:?}"),
            summary: "summary".into(),
            key_points: vec!["a".into(), "b".into(), "c".into()],
            key_entities: vec!["E".into()],
            keywords: vec!["k".into()],
        })
    }

    async fn translate_analysis(
        &self,
        analysis: &AnalysisOutput,
        _: ModelTier,
    ) -> Result<AnalysisOutput, LlmError> {
        Ok(AnalysisOutput {
            title: analysis.title.clone(),
            summary: "번역된 요약".into(),
            key_points: analysis.key_points.clone(),
            key_entities: analysis.key_entities.clone(),
            keywords: analysis.keywords.clone(),
        })
    }

    async fn translate_content(&self, _: &str, _: ModelTier) -> Result<String, LlmError> {
        Ok("<p>번역</p>".to_string())
    }

    async fn enhance_readability(&self, _: &str) -> Result<String, LlmError> {
        Err(LlmError::InvalidOutput("not html".into()))
    }
}

async fn spawn_proxy() -> String {
    let app = proxy::router(AppState::new(Arc::new(ServerSideOps)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/llm")
}

#[tokio::test]
async fn remote_detect_language_unwraps_result() {
    let ops = RemoteOps::new(spawn_proxy().await);
    assert_eq!(ops.detect_language("bonjour").await.unwrap(), "fr");
}

#[tokio::test]
async fn remote_analyze_deserializes_structured_result() {
    let ops = RemoteOps::new(spawn_proxy().await);
    let analysis = ops.analyze("<p>x</p>", ModelTier::Quality).await.unwrap();
    assert_eq!(analysis.title, "analyzed with Quality");
    assert_eq!(analysis.key_points.len(), 3);
}

#[tokio::test]
async fn remote_translate_analysis_preserves_title() {
    let ops = RemoteOps::new(spawn_proxy().await);
    let original = AnalysisOutput {
        title: "Keep Me".into(),
        summary: "s".into(),
        key_points: vec!["p".into()],
        key_entities: vec![],
        keywords: vec![],
    };
    let translated = ops
        .translate_analysis(&original, ModelTier::Fast)
        .await
        .unwrap();
    assert_eq!(translated.title, "Keep Me");
    assert_eq!(translated.summary, "번역된 요약");
}

#[tokio::test]
async fn remote_server_side_failure_surfaces_as_remote_error() {
    let ops = RemoteOps::new(spawn_proxy().await);
    let err = ops.enhance_readability("<p>x</p>").await.unwrap_err();
    match err {
        LlmError::Remote(message) => assert!(message.contains("invalid output")),
        other => panic!("expected remote error, got {other:?}"),
    }
}
