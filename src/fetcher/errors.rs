use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("network failure: {0}")]
    Network(String),

    #[error("http error {status}")]
    Http { status: reqwest::StatusCode },

    #[error("body too large ({0} bytes)")]
    BodyTooLarge(u64),

    #[error("unsupported content-type: {0}")]
    UnsupportedContentType(String),

    #[error("charset error: {0}")]
    Charset(String),
}

impl FetchError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Http { status }
        } else if err.is_timeout() {
            Self::Network(format!("request timed out: {err}"))
        } else if err.is_redirect() {
            Self::Network("too many redirects".to_string())
        } else {
            // DNS, TLS, connection and relay failures all surface here.
            Self::Network(err.to_string())
        }
    }
}
