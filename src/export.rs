//! Markdown rendering of a completed job result.

use crate::entities::JobResult;
use std::fmt::Write;

/// Renders the result as a markdown document: title, summary, key points,
/// entities, keywords, then the display-language content.
pub fn to_markdown(result: &JobResult) -> String {
    let mut doc = String::new();

    let _ = writeln!(doc, "# {}\n", result.title);
    if !result.source_url.is_empty() {
        let _ = writeln!(doc, "원문: <{}>\n", result.source_url);
    }

    let _ = writeln!(doc, "## 요약\n\n{}\n", result.outputs.summary);

    let _ = writeln!(doc, "## 핵심 포인트\n");
    for point in &result.outputs.key_points {
        let _ = writeln!(doc, "- {point}");
    }
    doc.push('\n');

    if !result.outputs.key_entities.is_empty() {
        let _ = writeln!(doc, "## 주요 개체\n");
        for entity in &result.outputs.key_entities {
            let _ = writeln!(doc, "- {entity}");
        }
        doc.push('\n');
    }

    if !result.outputs.keywords.is_empty() {
        let _ = writeln!(doc, "## 키워드\n\n{}\n", result.outputs.keywords.join(", "));
    }

    let _ = writeln!(doc, "## 본문\n\n{}", result.outputs.full_translation);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::OutputBundle;

    fn result() -> JobResult {
        JobResult {
            title: "제목".into(),
            source_url: "https://example.com/a".into(),
            original_content: "<p>hi</p>".into(),
            started_at: chrono::Utc::now(),
            elapsed_secs: 3.2,
            outputs: OutputBundle {
                summary: "한 줄 요약".into(),
                key_points: vec!["하나".into(), "둘".into()],
                key_entities: vec!["회사".into()],
                keywords: vec!["키워드".into(), "분석".into()],
                full_translation: "<p>안녕</p>".into(),
            },
        }
    }

    #[test]
    fn renders_all_sections() {
        let md = to_markdown(&result());
        assert!(md.starts_with("# 제목\n"));
        assert!(md.contains("원문: <https://example.com/a>"));
        assert!(md.contains("## 요약"));
        assert!(md.contains("- 하나"));
        assert!(md.contains("키워드, 분석"));
        assert!(md.contains("<p>안녕</p>"));
    }

    #[test]
    fn raw_text_result_has_no_source_line() {
        let mut r = result();
        r.source_url = String::new();
        let md = to_markdown(&r);
        assert!(!md.contains("원문:"));
    }

    #[test]
    fn empty_lists_skip_their_sections() {
        let mut r = result();
        r.outputs.key_entities.clear();
        r.outputs.keywords.clear();
        let md = to_markdown(&r);
        assert!(!md.contains("## 주요 개체"));
        assert!(!md.contains("## 키워드"));
    }
}
