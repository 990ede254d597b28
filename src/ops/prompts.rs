//! Prompt construction for the five language operations.

/// Human-readable name for the handful of display languages this tool
/// targets; falls back to the bare code for anything else.
pub fn language_name(code: &str) -> String {
    match code {
        "ko" => "Korean (한국어)".to_string(),
        "en" => "English".to_string(),
        "ja" => "Japanese (日本語)".to_string(),
        "zh" => "Chinese (中文)".to_string(),
        other => other.to_string(),
    }
}

pub fn detect_language(sample: &str) -> String {
    format!(
        "Identify the language of the following text. Respond with exactly \
         the two-letter ISO 639-1 code (for example: en, ko, ja, fr) and \
         nothing else.\n\nText:\n{sample}"
    )
}

pub fn analyze(content_html: &str) -> String {
    format!(
        "You are a content analyst. Read the following HTML content and \
         produce, in the same language as the content itself:\n\
         - title: a concise title for the content\n\
         - summary: a one-line summary\n\
         - keyPoints: 3 to 5 key points, ordered by importance\n\
         - keyEntities: the people, organizations, places and products mentioned\n\
         - keywords: the most relevant keywords\n\n\
         Respond only with JSON matching the requested schema.\n\n\
         Content:\n{content_html}"
    )
}

pub fn translate_analysis(analysis_json: &str, target: &str) -> String {
    let target_name = language_name(target);
    format!(
        "Translate the string values of the following analysis record into \
         {target_name}. Keep the exact JSON field structure; translate the \
         summary, each key point, each key entity and each keyword. Respond \
         only with JSON matching the requested schema.\n\n{analysis_json}"
    )
}

pub fn translate_content_instruction(target: &str) -> String {
    let target_name = language_name(target);
    format!(
        "You are a professional translator. Translate the visible text of \
         the HTML the user provides into {target_name}. Every tag and every \
         attribute must remain byte-for-byte unchanged; translate only the \
         text between tags. Output the translated HTML and nothing else -- \
         no code fences, no commentary."
    )
}

pub fn enhance_instruction(target: &str) -> String {
    let target_name = language_name(target);
    format!(
        "You are an editor. Restructure the {target_name} HTML the user \
         provides for readability: add headings where sections emerge, turn \
         enumerations into lists, emphasize key phrases and break up long \
         paragraphs. Do not change the meaning and do not change the \
         language. Output only HTML."
    )
}
