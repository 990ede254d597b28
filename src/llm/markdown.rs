//! Code-fence stripping for model replies.
//!
//! Models routinely wrap JSON or HTML replies in a fenced code block even
//! when told not to; the fence (and an optional language hint on its first
//! line) has to come off before parsing.

pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    let body = body.strip_suffix("```").unwrap_or(body);

    // The first line may be a language hint like `json` or `html`.
    let body = match body.split_once('\n') {
        Some((first, rest)) if first.trim().chars().all(|c| c.is_ascii_alphanumeric()) => rest,
        _ => body,
    };
    body.trim().to_string()
}
