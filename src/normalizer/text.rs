//! Raw pasted-text normalization.

use regex::Regex;
use once_cell::sync::Lazy;

static BLANK_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n+").unwrap());

/// Wraps blank-line-separated blocks in `<p>` tags, converting newlines
/// inside a block to `<br>`. Text is HTML-escaped; whitespace-only blocks
/// are skipped.
pub fn paragraphs_to_html(raw: &str) -> String {
    let raw = raw.replace("\r\n", "\n");

    BLANK_LINE_RE
        .split(&raw)
        .filter(|block| !block.trim().is_empty())
        .map(|block| {
            let lines: Vec<String> = block
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| ammonia::clean_text(line.trim()))
                .collect();
            format!("<p>{}</p>", lines.join("<br>"))
        })
        .collect()
}
