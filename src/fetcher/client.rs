//! Page fetching through a CORS relay.

use crate::fetcher::{decode::decode_body, errors::FetchError};
use once_cell::sync::Lazy;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::instrument;
use url::Url;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const USER_AGENT: &str = "LinguaScope/0.1 (+https://linguascope.example.com)";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(60))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
                    .parse()
                    .unwrap(),
            );
            headers
        })
        .build()
        .expect("Failed to build HTTP client")
});

/// Fetches target pages through a CORS relay, returning the decoded body.
///
/// The relay prefix is a complete URL up to and including the query key
/// (e.g. `https://api.allorigins.win/raw?url=`); the target URL is
/// percent-encoded and appended verbatim.
#[derive(Debug, Clone)]
pub struct RelayFetcher {
    relay_url: String,
}

impl RelayFetcher {
    pub fn new(relay_url: impl Into<String>) -> Self {
        Self {
            relay_url: relay_url.into(),
        }
    }

    fn relay_request_url(&self, target: &Url) -> String {
        let encoded = utf8_percent_encode(target.as_str(), NON_ALPHANUMERIC);
        format!("{}{}", self.relay_url, encoded)
    }

    #[instrument(skip(self), fields(url = %target))]
    pub async fn fetch(&self, target: &Url) -> Result<String, FetchError> {
        let response = HTTP_CLIENT
            .get(self.relay_request_url(target))
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // The relay passes the target page's status through.
            return Err(FetchError::Http { status });
        }

        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        if !content_type.contains("text/html")
            && !content_type.contains("application/xhtml")
            && !content_type.contains("text/plain")
        {
            return Err(FetchError::UnsupportedContentType(content_type));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        // Content-Length can be missing; re-check after download.
        if body.len() as u64 > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(body.len() as u64));
        }

        decode_body(&content_type, &body)
    }
}
