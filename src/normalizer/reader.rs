//! Readable-content extraction with a manual fallback.
//!
//! The readability crate does the heavy lifting. When it fails or yields
//! almost nothing (script-rendered pages, unusual layouts), a fallback pass
//! removes a fixed deny-list of boilerplate elements from the raw body and
//! uses whatever markup remains.

use kuchiki::traits::TendrilSink;
use readability::extractor;
use tracing::debug;
use url::Url;

/// Below this much extracted text the readability result is considered a
/// miss and the fallback runs instead.
const MIN_READABLE_CHARS: usize = 100;

/// Boilerplate elements and selector patterns removed by the fallback:
/// navigation, ads, comments, cookie banners, social widgets, sidebars.
const DENY_SELECTORS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "iframe",
    "svg",
    "form",
    "button",
    "nav",
    "header",
    "footer",
    "aside",
    ".nav",
    ".navbar",
    ".menu",
    ".breadcrumb",
    ".sidebar",
    ".side-bar",
    ".widget",
    ".comment",
    ".comments",
    ".reply",
    ".ad",
    ".ads",
    ".advert",
    ".advertisement",
    ".sponsored",
    ".banner",
    ".cookie",
    ".cookie-banner",
    ".cookie-notice",
    ".gdpr",
    ".consent",
    ".social",
    ".share",
    ".sns",
    ".related",
    ".recommend",
    ".popup",
    ".modal",
    ".newsletter",
    "#sidebar",
    "#comments",
    "#nav",
    "#header",
    "#footer",
];

/// Extracts the readable portion of a page as an HTML fragment. Always
/// returns markup; emptiness is judged later, after sanitization.
pub fn extract_readable(html: &str, url: &Url) -> String {
    if let Ok(article) = extractor::extract(&mut html.as_bytes(), url)
        && article.text.trim().chars().count() >= MIN_READABLE_CHARS
    {
        return article.content;
    }

    debug!(url = %url, "readability yielded too little text, using deny-list fallback");
    fallback_body(html)
}

/// Removes deny-listed elements from the document body and returns the
/// remaining body markup.
fn fallback_body(html: &str) -> String {
    let document = kuchiki::parse_html().one(html);

    for selector in DENY_SELECTORS {
        let Ok(matches) = document.select(selector) else {
            continue;
        };
        // Collect before detaching; detaching invalidates the walk.
        let nodes: Vec<_> = matches.collect();
        for node in nodes {
            node.as_node().detach();
        }
    }

    match document.select_first("body") {
        Ok(body) => body
            .as_node()
            .children()
            .map(|child| child.to_string())
            .collect(),
        Err(()) => html.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readability_handles_article_pages() {
        let body_text = "This is the main article body. ".repeat(20);
        let html = format!(
            "<html><head><title>T</title></head><body><article><h1>T</h1><p>{body_text}</p></article></body></html>"
        );
        let url = Url::parse("https://example.com/post").unwrap();
        let extracted = extract_readable(&html, &url);
        assert!(extracted.contains("main article body"));
    }

    #[test]
    fn fallback_removes_deny_listed_elements() {
        let html = r#"<html><body>
            <nav>Menu</nav>
            <div class="cookie-banner">Accept cookies</div>
            <div class="ads">Buy now</div>
            <p>Actual content stays.</p>
            <footer>footer text</footer>
        </body></html>"#;
        let remaining = fallback_body(html);
        assert!(remaining.contains("Actual content stays."));
        assert!(!remaining.contains("Menu"));
        assert!(!remaining.contains("Accept cookies"));
        assert!(!remaining.contains("Buy now"));
        assert!(!remaining.contains("footer text"));
    }

    #[test]
    fn short_readability_output_triggers_fallback() {
        // Too little article text for readability to count as a hit; the
        // fallback must still preserve the paragraph.
        let html = r#"<html><body><nav>x</nav><p>Tiny.</p></body></html>"#;
        let url = Url::parse("https://example.com/").unwrap();
        let extracted = extract_readable(html, &url);
        assert!(extracted.contains("Tiny."));
    }
}
