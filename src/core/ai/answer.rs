//! Question sanitization and answer extraction

use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when the model gives no usable text
pub(super) const FALLBACK_ANSWER: &str = "unknown";

/// Markup-like substrings, stripped to reduce prompt-injection surface
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Strip `<...>` substrings from the question and trim surrounding
/// whitespace.
pub(super) fn sanitize_question(question: &str) -> String {
    TAG_RE.replace_all(question, "").trim().to_string()
}

/// Reduce the model's reply to a single word.
///
/// Takes the first whitespace-delimited token with at most one trailing
/// punctuation character stripped; tokens with no alphanumeric content are
/// returned unmodified. Empty replies fall back to [`FALLBACK_ANSWER`].
pub(super) fn extract_answer(text: &str) -> String {
    let text = text.trim();
    let Some(first) = text.split_whitespace().next() else {
        return FALLBACK_ANSWER.to_string();
    };

    if !first.chars().any(char::is_alphanumeric) {
        return first.to_string();
    }
    first
        .strip_suffix(['.', ',', '!', '?', ';', ':'])
        .unwrap_or(first)
        .to_string()
}
