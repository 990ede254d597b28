//! The credential-hiding dispatch endpoint.
//!
//! One POST route accepting `{action, payload}`; the five actions map onto
//! the shared [`LanguageOps`] interface. 200 `{result}` on success,
//! 500 `{error}` on operation failure, 400 for an unrecognized action or a
//! payload that does not fit it, 405 for non-POST (axum's method routing).

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::app_state::AppState;
use crate::proxy::dtos::{
    DetectLanguagePayload, EnhanceReadabilityPayload, ErrorResponse, PerformAnalysisPayload,
    PerformTranslationPayload, ResultResponse, TranslateAnalysisPayload,
};

pub async fn dispatch(State(state): State<AppState>, Json(request): Json<Value>) -> Response {
    let Some(action) = request.get("action").and_then(Value::as_str) else {
        return bad_request("missing 'action' field");
    };
    let payload = request.get("payload").cloned().unwrap_or(Value::Null);

    info!(action, "proxy dispatch");
    match action {
        "detectLanguage" => {
            let Ok(p) = serde_json::from_value::<DetectLanguagePayload>(payload) else {
                return bad_request("invalid payload for detectLanguage");
            };
            respond(state.ops.detect_language(&p.sample).await)
        }
        "performAnalysis" => {
            let Ok(p) = serde_json::from_value::<PerformAnalysisPayload>(payload) else {
                return bad_request("invalid payload for performAnalysis");
            };
            respond(state.ops.analyze(&p.content, p.tier).await)
        }
        "translateAnalysis" => {
            let Ok(p) = serde_json::from_value::<TranslateAnalysisPayload>(payload) else {
                return bad_request("invalid payload for translateAnalysis");
            };
            respond(state.ops.translate_analysis(&p.analysis, p.tier).await)
        }
        "performTranslation" => {
            let Ok(p) = serde_json::from_value::<PerformTranslationPayload>(payload) else {
                return bad_request("invalid payload for performTranslation");
            };
            respond(state.ops.translate_content(&p.content, p.tier).await)
        }
        "enhanceReadability" => {
            let Ok(p) = serde_json::from_value::<EnhanceReadabilityPayload>(payload) else {
                return bad_request("invalid payload for enhanceReadability");
            };
            respond(state.ops.enhance_readability(&p.content).await)
        }
        other => bad_request(&format!("unknown action: {other}")),
    }
}

fn respond<T: Serialize, E: std::fmt::Display>(result: Result<T, E>) -> Response {
    match result {
        Ok(result) => (StatusCode::OK, Json(ResultResponse { result })).into_response(),
        Err(err) => {
            warn!(error = %err, "proxy operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
