use std::sync::OnceLock;

use regex::Regex;

use super::ELLIPSIS;

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid regex"))
}

fn paragraph_break_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:\r?\n){2,}").expect("Invalid regex"))
}

fn sentence_end_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+").expect("Invalid regex"))
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize(text: &str) -> String {
    whitespace_regex().replace_all(text, " ").trim().to_string()
}

/// Split text into paragraphs on blank-line boundaries.
///
/// Whitespace-only segments are dropped. When nothing survives, the trimmed
/// whole text is returned as the only paragraph (which may be empty).
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let paragraphs: Vec<String> = paragraph_break_regex()
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if paragraphs.is_empty() {
        vec![text.trim().to_string()]
    } else {
        paragraphs
    }
}

/// Split text into sentences after `.`, `!` or `?` followed by whitespace.
///
/// The terminal punctuation stays attached to the sentence it ends.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in sentence_end_regex().find_iter(text) {
        // Punctuation is a single ASCII byte, so +1 stays on a char boundary.
        push_trimmed(&mut sentences, &text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(out: &mut Vec<String>, segment: &str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        out.push(segment.to_string());
    }
}

/// Limit text to `max_len` characters, marking the cut with an ellipsis.
pub fn shorten(text: &str, max_len: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_len {
        return trimmed.to_string();
    }

    let head: String = trimmed.chars().take(max_len.saturating_sub(1)).collect();
    format!("{}{}", head.trim_end(), ELLIPSIS)
}

/// Limit text to `max_words` whitespace-separated words.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.trim().to_string();
    }
    format!("{}{}", words[..max_words].join(" "), ELLIPSIS)
}
