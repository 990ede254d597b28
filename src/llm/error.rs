use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("provider returned http {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("model response missing required field '{field}'")]
    IncompleteResponse { field: &'static str },

    #[error("model returned invalid output: {0}")]
    InvalidOutput(String),

    #[error("proxy error: {0}")]
    Remote(String),
}

impl LlmError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Http {
                status,
                body: err.to_string(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}
