use serde_json::Value;

use crate::flashcards::Flashcard;
use crate::language::Language;

use super::{AiError, Result};

/// Build the instruction sent to the model
pub fn build_prompt(text: &str, n: usize, language: Language) -> String {
    match language {
        Language::English => format!(
            r#"You are an expert educator. From the following text, generate {n} flashcards.
Each flashcard must contain:
- A clear, precise and challenging question
- A short but complete answer

Expected format (strict JSON):
[
    {{"question": "...", "answer": "..."}},
    ...
]

Provided text:
{text}
"#
        ),
        Language::French => format!(
            r#"Tu es un expert pédagogique. À partir du texte suivant, génère {n} flashcards.
Chaque flashcard doit contenir:
- Une question claire, précise et difficile
- Une réponse courte mais complète

Format attendu (JSON strict) :
[
    {{"question": "...", "answer": "..."}},
    ...
]

Texte fourni :
{text}
"#
        ),
    }
}

/// Pull the generated text out of a Responses API payload.
///
/// Uses `output_text` when present, otherwise joins the text pieces found
/// under `output[*].content`.
pub fn extract_output_text(response: &Value) -> String {
    if let Some(text) = response.get("output_text").and_then(Value::as_str) {
        if !text.trim().is_empty() {
            return text.trim().to_string();
        }
    }

    let Some(items) = response.get("output").and_then(Value::as_array) else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();
    for item in items {
        let Some(obj) = item.as_object() else {
            parts.push(scalar_text(item));
            continue;
        };

        let content = ["content", "text", "message"]
            .iter()
            .filter_map(|key| obj.get(*key))
            .find(|v| !v.is_null());

        match content {
            Some(Value::Array(blocks)) => {
                for block in blocks {
                    if block.is_object() {
                        if let Some(text) = block.get("text").and_then(Value::as_str) {
                            parts.push(text.to_string());
                        }
                    } else {
                        parts.push(scalar_text(block));
                    }
                }
            }
            Some(other) => parts.push(scalar_text(other)),
            None => parts.push(item.to_string()),
        }
    }

    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Turn raw model output into at most `n` flashcards
pub fn parse_cards(raw: &str, n: usize) -> Result<Vec<Flashcard>> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let value: Value = serde_json::from_str(cleaned).map_err(|_| AiError::InvalidJson {
        raw: cleaned.to_string(),
    })?;

    let Value::Array(items) = value else {
        return Err(AiError::UnexpectedShape {
            raw: cleaned.to_string(),
        });
    };

    let cards: Vec<Flashcard> = items
        .iter()
        .filter_map(|item| {
            let question = field(item, &["question", "q"])?;
            let answer = field(item, &["answer", "a"])?;
            Flashcard::try_new(question, answer)
        })
        .collect();

    if cards.is_empty() {
        return Err(AiError::NoValidCards {
            raw: cleaned.to_string(),
        });
    }

    if cards.len() < n {
        log::debug!("Model returned {} of {} requested cards", cards.len(), n);
    }
    Ok(cards.into_iter().take(n).collect())
}

// First non-empty value among `keys`, stringified
fn field(item: &Value, keys: &[&str]) -> Option<String> {
    let obj = item.as_object()?;
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_array() {
        let raw = r#"[{"question": "What is ATP?", "answer": "The energy currency of the cell."}]"#;
        let cards = parse_cards(raw, 5).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question(), "What is ATP?");
        assert_eq!(cards[0].answer(), "The energy currency of the cell.");
    }

    #[test]
    fn test_parse_strips_code_fences() {
        let raw = "```json\n[{\"question\": \"Q1\", \"answer\": \"A1\"}]\n```";
        let cards = parse_cards(raw, 5).unwrap();
        assert_eq!(cards, vec![Flashcard::new("Q1", "A1")]);
    }

    #[test]
    fn test_parse_accepts_short_aliases_and_trims() {
        let raw = r#"[{"q": "  Q1 ", "a": " A1  "}, {"question": "Q2", "a": 42}]"#;
        let cards = parse_cards(raw, 5).unwrap();
        assert_eq!(cards[0], Flashcard::new("Q1", "A1"));
        assert_eq!(cards[1].answer(), "42");
    }

    #[test]
    fn test_parse_drops_incomplete_items() {
        let raw = r#"[{"question": "Q1"}, "loose string", {"question": "", "answer": "A"}, {"q": "Q2", "a": "A2"}]"#;
        let cards = parse_cards(raw, 5).unwrap();
        assert_eq!(cards, vec![Flashcard::new("Q2", "A2")]);
    }

    #[test]
    fn test_parse_truncates_to_requested_count() {
        let items: Vec<_> = (0..8)
            .map(|i| json!({"question": format!("Q{}", i), "answer": "A"}))
            .collect();
        let raw = serde_json::to_string(&items).unwrap();
        let cards = parse_cards(&raw, 3).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].question(), "Q2");
    }

    #[test]
    fn test_parse_wrapped_object_is_unexpected_shape() {
        let raw = r#"{"flashcards": [{"question": "Q", "answer": "A"}]}"#;
        match parse_cards(raw, 5) {
            Err(AiError::UnexpectedShape { raw: kept }) => assert!(kept.contains("flashcards")),
            other => panic!("expected UnexpectedShape, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_garbage_keeps_raw_output() {
        let err = parse_cards("Sorry, I cannot help with that.", 5).unwrap_err();
        assert!(matches!(err, AiError::InvalidJson { .. }));
        assert_eq!(err.raw_output(), Some("Sorry, I cannot help with that."));
    }

    #[test]
    fn test_parse_empty_list_has_no_valid_cards() {
        assert!(matches!(
            parse_cards("[]", 5),
            Err(AiError::NoValidCards { .. })
        ));
    }

    #[test]
    fn test_extract_output_text_prefers_output_text() {
        let response = json!({"output_text": " [1] ", "output": [{"content": [{"text": "ignored"}]}]});
        assert_eq!(extract_output_text(&response), "[1]");
    }

    #[test]
    fn test_extract_output_text_joins_content_blocks() {
        let response = json!({
            "output": [
                {"type": "message", "content": [
                    {"type": "output_text", "text": "[{\"q\": \"Q\","},
                    {"type": "output_text", "text": "\"a\": \"A\"}]"}
                ]},
                {"type": "reasoning", "content": []}
            ]
        });
        let raw = extract_output_text(&response);
        let cards = parse_cards(&raw, 1).unwrap();
        assert_eq!(cards, vec![Flashcard::new("Q", "A")]);
    }

    #[test]
    fn test_extract_output_text_missing_fields() {
        assert_eq!(extract_output_text(&json!({"id": "resp_1"})), "");
    }

    #[test]
    fn test_build_prompt_mentions_count_and_text() {
        let prompt = build_prompt("Cells divide.", 7, Language::English);
        assert!(prompt.contains("generate 7 flashcards"));
        assert!(prompt.contains("Cells divide."));
        assert!(prompt.contains(r#"{"question": "...", "answer": "..."}"#));

        let prompt = build_prompt("Les cellules se divisent.", 3, Language::French);
        assert!(prompt.contains("génère 3 flashcards"));
    }
}
