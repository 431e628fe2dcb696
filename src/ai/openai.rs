use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::{json, Value};

use crate::flashcards::Flashcard;
use crate::language::Language;

use super::parse::{build_prompt, extract_output_text, parse_cards};
use super::{AiConfig, AiError, CardGenerator, Result};

/// Client for an OpenAI-style Responses endpoint
pub struct OpenAiGenerator {
    client: Client,
    config: AiConfig,
    api_key: String,
    language: Language,
}

impl OpenAiGenerator {
    /// Create a generator, reading the API key from `config.api_key_env`
    pub fn new(config: AiConfig, language: Language) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AiError::MissingApiKey(config.api_key_env.clone()))?;
        Self::with_api_key(config, api_key, language)
    }

    pub fn with_api_key(config: AiConfig, api_key: String, language: Language) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            config,
            api_key,
            language,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.config.base_url.trim_end_matches('/'))
    }

    fn request(&self, prompt: &str) -> Result<Value> {
        let body = json!({
            "model": self.config.model,
            "input": prompt,
            "max_output_tokens": self.config.max_output_tokens,
        });

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json()?)
    }
}

impl CardGenerator for OpenAiGenerator {
    fn generate(&self, text: &str, n: usize) -> Result<Vec<Flashcard>> {
        if text.trim().is_empty() || n == 0 {
            return Ok(Vec::new());
        }

        let prompt = build_prompt(text, n, self.language);
        log::debug!(
            "Requesting {} cards from {} ({} prompt chars)",
            n,
            self.config.model,
            prompt.chars().count()
        );

        let payload = self.request(&prompt)?;
        let raw = extract_output_text(&payload);
        let cards = parse_cards(&raw, n)?;
        log::info!("Model returned {} flashcards", cards.len());
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AiConfig {
        AiConfig {
            // Unroutable, so any accidental request fails fast
            base_url: "http://127.0.0.1:9/v1/".to_string(),
            api_key_env: "FLASHDECK_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..AiConfig::default()
        }
    }

    #[test]
    fn test_missing_api_key() {
        match OpenAiGenerator::new(config(), Language::English) {
            Err(AiError::MissingApiKey(var)) => {
                assert_eq!(var, "FLASHDECK_TEST_KEY_THAT_IS_NEVER_SET")
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("expected MissingApiKey"),
        }
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let generator =
            OpenAiGenerator::with_api_key(config(), "sk-test".to_string(), Language::English)
                .unwrap();
        assert_eq!(generator.endpoint(), "http://127.0.0.1:9/v1/responses");
    }

    #[test]
    fn test_blank_text_skips_request() {
        let generator =
            OpenAiGenerator::with_api_key(config(), "sk-test".to_string(), Language::English)
                .unwrap();
        assert!(generator.generate("  \n ", 5).unwrap().is_empty());
        assert!(generator.generate("Some text", 0).unwrap().is_empty());
    }
}
