//! Terminal job failures and their user-facing messages.

use crate::fetcher::FetchError;
use crate::llm::LlmError;
use crate::normalizer::ExtractionError;
use thiserror::Error;

/// Any of these is terminal for the current job: no retries, the job moves
/// to `failed` and a new submission starts from a clean slate.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("analysis failed: {0}")]
    Analysis(#[source] LlmError),

    #[error("translation failed: {0}")]
    Translation(#[source] LlmError),
}

impl PipelineError {
    /// The single localized message surfaced to the user. Fetch failures
    /// carry status-specific guidance (403/404/5xx).
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Fetch(err) => fetch_message(err),
            PipelineError::Extraction(_) => {
                "본문을 추출하지 못했습니다. 다른 URL을 시도하거나 본문을 직접 붙여넣어 주세요."
                    .to_string()
            }
            PipelineError::Analysis(_) => {
                "내용 분석에 실패했습니다. 잠시 후 다시 시도해 주세요.".to_string()
            }
            PipelineError::Translation(_) => {
                "번역에 실패했습니다. 잠시 후 다시 시도해 주세요.".to_string()
            }
        }
    }
}

fn fetch_message(err: &FetchError) -> String {
    match err {
        FetchError::InvalidUrl(_) => "올바른 URL 형식이 아닙니다. 주소를 확인해 주세요.".to_string(),
        FetchError::Network(_) => {
            "네트워크 오류가 발생했습니다. 연결 상태를 확인한 후 다시 시도해 주세요.".to_string()
        }
        FetchError::Http { status } => match status.as_u16() {
            403 => "콘텐츠에 접근할 수 없습니다 (403). 해당 사이트가 외부 접근을 차단하고 \
                    있습니다. 본문을 직접 붙여넣어 보세요."
                .to_string(),
            404 => "페이지를 찾을 수 없습니다 (404). URL이 정확한지 확인해 주세요.".to_string(),
            code if code >= 500 => format!(
                "대상 서버에서 오류가 발생했습니다 ({code}). 잠시 후 다시 시도해 주세요."
            ),
            code => format!("콘텐츠를 가져오지 못했습니다 (HTTP {code})."),
        },
        FetchError::BodyTooLarge(_) => {
            "문서가 너무 커서 처리할 수 없습니다. 본문 일부를 붙여넣어 주세요.".to_string()
        }
        FetchError::UnsupportedContentType(_) => {
            "HTML 문서가 아닙니다. 웹 페이지 주소를 입력해 주세요.".to_string()
        }
        FetchError::Charset(_) => "문서의 문자 인코딩을 해석하지 못했습니다.".to_string(),
    }
}
