//! Charset resolution and UTF-8 decoding for fetched pages.
//!
//! Relayed pages are not reliably UTF-8. The charset is resolved from the
//! Content-Type header first, then from `<meta>` declarations in the first
//! 4KB of the body, then heuristically with chardetng.

use crate::fetcher::errors::FetchError;
use encoding_rs::Encoding;
use regex::Regex;
use once_cell::sync::Lazy;

const META_SCAN_BYTES: usize = 4096;

static HEADER_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

pub fn decode_body(content_type: &str, body: &[u8]) -> Result<String, FetchError> {
    let encoding = resolve_encoding(content_type, body);
    let (decoded, _, had_errors) = encoding.decode(body);
    if had_errors {
        return Err(FetchError::Charset(format!(
            "failed to decode body as {}",
            encoding.name()
        )));
    }
    Ok(decoded.into_owned())
}

fn resolve_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(enc) = charset_from(content_type, &HEADER_CHARSET_RE) {
        return enc;
    }

    let head = &body[..body.len().min(META_SCAN_BYTES)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(enc) = charset_from(&head_str, &META_CHARSET_RE) {
        return enc;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, false);
    detector.guess(None, true)
}

fn charset_from(haystack: &str, re: &Regex) -> Option<&'static Encoding> {
    let label = re.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf8_from_header() {
        let body = "안녕하세요, world!".as_bytes();
        let decoded = decode_body("text/html; charset=utf-8", body).unwrap();
        assert_eq!(decoded, "안녕하세요, world!");
    }

    #[test]
    fn resolves_charset_from_meta_tag() {
        let body = b"<html><head><meta charset=\"euc-kr\"></head></html>";
        let enc = resolve_encoding("text/html", body);
        assert_eq!(enc.name(), "EUC-KR");
    }

    #[test]
    fn header_charset_wins_over_meta() {
        let body = b"<html><head><meta charset=\"euc-kr\"></head></html>";
        let enc = resolve_encoding("text/html; charset=utf-8", body);
        assert_eq!(enc.name(), "UTF-8");
    }

    #[test]
    fn falls_back_to_detection() {
        let body = "plain ascii page with no declarations".as_bytes();
        let decoded = decode_body("text/html", body).unwrap();
        assert!(decoded.contains("plain ascii"));
    }
}
