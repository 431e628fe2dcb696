//! User configuration loaded from TOML

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::AiConfig;
use crate::flashcards::{SummaryOptions, SynthesisOptions};
use crate::language::Language;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {message}")]
    Invalid { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// How cards are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Heuristic,
    Ai,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heuristic => f.write_str("heuristic"),
            Self::Ai => f.write_str("ai"),
        }
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" => Ok(Self::Heuristic),
            "ai" | "openai" => Ok(Self::Ai),
            other => Err(format!("unknown mode '{}' (expected heuristic or ai)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    /// Default number of cards per generation
    pub cards: usize,
    pub mode: GenerationMode,
    pub summary: SummaryOptions,
    pub ai: AiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            cards: 10,
            mode: GenerationMode::default(),
            summary: SummaryOptions::default(),
            ai: AiConfig::default(),
        }
    }
}

impl Config {
    /// `<config dir>/flashdeck/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("flashdeck").join("config.toml"))
    }

    /// Load from an explicit path, or from the default location.
    ///
    /// A missing default file yields defaults; a missing explicit file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("cards", self.cards),
            ("summary.max_sentences", self.summary.max_sentences),
            ("summary.max_words", self.summary.max_words),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if self.ai.model.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "ai.model".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Options for the heuristic synthesizer
    pub fn synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            language: self.language,
            summary: self.summary,
            ..SynthesisOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cards, 10);
        assert_eq!(config.mode, GenerationMode::Heuristic);
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert_eq!(config.ai.max_output_tokens, 1200);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = Config::from_toml(
            r#"
language = "fr"
mode = "ai"

[summary]
max_words = 40

[ai]
base_url = "http://localhost:8080/v1"
"#,
        )
        .unwrap();

        assert_eq!(config.language, Language::French);
        assert_eq!(config.mode, GenerationMode::Ai);
        assert_eq!(config.summary.max_words, 40);
        assert_eq!(config.summary.max_sentences, 2);
        assert_eq!(config.ai.base_url, "http://localhost:8080/v1");
        assert_eq!(config.ai.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_rejects_zero_cards() {
        let err = Config::from_toml("cards = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "cards"));
    }

    #[test]
    fn test_rejects_unknown_language() {
        assert!(matches!(
            Config::from_toml(r#"language = "de""#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "cards = 15\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.cards, 15);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::NotFound(p)) if p == path
        ));
    }

    #[test]
    fn test_synthesis_options_follow_config() {
        let config = Config {
            language: Language::French,
            summary: SummaryOptions {
                max_sentences: 1,
                max_words: 20,
            },
            ..Config::default()
        };
        let options = config.synthesis_options();
        assert_eq!(options.language, Language::French);
        assert_eq!(options.summary.max_words, 20);
        assert_eq!(options.passage_snippet_chars, 200);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("AI".parse::<GenerationMode>(), Ok(GenerationMode::Ai));
        assert_eq!("heuristic".parse::<GenerationMode>(), Ok(GenerationMode::Heuristic));
        assert!("magic".parse::<GenerationMode>().is_err());
    }
}
