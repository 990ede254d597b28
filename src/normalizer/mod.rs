//! Content normalization: turn a fetched page or pasted text into a
//! sanitized HTML fragment suitable for analysis.

pub mod reader;
pub mod sanitizer;
pub mod text;

use scraper::Html;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("no text content after extraction")]
    EmptyContent,
}

/// Normalizes a fetched page: readability extraction (with deny-list
/// fallback), allow-list sanitization and link absolutization against the
/// page URL.
pub fn from_url(raw_html: &str, base: &Url) -> Result<String, ExtractionError> {
    let readable = reader::extract_readable(raw_html, base);
    let clean = sanitizer::sanitize(&readable, base);

    if visible_text(&clean).trim().is_empty() {
        return Err(ExtractionError::EmptyContent);
    }
    Ok(clean)
}

/// Normalizes pasted text: blank-line-separated blocks become paragraphs.
/// No sanitizer pass is needed since no markup was ever introduced.
pub fn from_text(raw: &str) -> Result<String, ExtractionError> {
    let html = text::paragraphs_to_html(raw);
    if html.is_empty() {
        return Err(ExtractionError::EmptyContent);
    }
    Ok(html)
}

/// Visible text of an HTML fragment, tags stripped.
pub fn visible_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_url_rejects_empty_extraction() {
        let base = Url::parse("https://example.com/").unwrap();
        let result = from_url("<html><body><script>x()</script></body></html>", &base);
        assert!(matches!(result, Err(ExtractionError::EmptyContent)));
    }

    #[test]
    fn from_url_produces_sanitized_fragment() {
        let base = Url::parse("https://example.com/a/").unwrap();
        let html = r#"<html><body><article>
            <h1>Title</h1>
            <p>Some body text that is long enough to keep, with a
            <a href="/rel">relative link</a> inside.</p>
            <script>alert(1)</script>
        </article></body></html>"#;
        let clean = from_url(html, &base).unwrap();
        assert!(!clean.contains("<script"));
        assert!(clean.contains("https://example.com/rel"));
    }

    #[test]
    fn from_text_rejects_whitespace_only() {
        assert!(matches!(
            from_text("  \n\n   \n"),
            Err(ExtractionError::EmptyContent)
        ));
    }

    #[test]
    fn visible_text_strips_tags() {
        assert_eq!(visible_text("<p>a<b>b</b></p>"), "ab");
    }
}
