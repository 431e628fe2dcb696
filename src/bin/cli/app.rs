use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use flashdeck_lib::ai::{CardGenerator, OpenAiGenerator};
use flashdeck_lib::config::{Config, GenerationMode};
use flashdeck_lib::deck::StudySession;
use flashdeck_lib::document;
use flashdeck_lib::flashcards::{Flashcard, SynthesisOptions, Synthesizer};
use flashdeck_lib::language::Language;

use crate::GenerateArgs;

pub const DEFAULT_DECK: &str = "Default";

/// Shared application state for CLI commands
pub struct App {
    pub config: Config,
    pub session: StudySession,
}

impl App {
    /// Load configuration and start an empty session
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path).context("Failed to load configuration")?;
        Ok(Self {
            config,
            session: StudySession::new(),
        })
    }

    /// Concatenated text of all inputs; "-" reads stdin
    pub fn load_text(&self, files: &[String]) -> Result<String> {
        let mut all_text = String::new();
        for file in files {
            if file == "-" {
                if crate::stdin_is_tty() {
                    log::warn!("Reading document text from the terminal; end with Ctrl-D");
                }
                let text = crate::read_stdin().context("Failed to read stdin")?;
                all_text.push('\n');
                all_text.push_str(&text);
            } else {
                all_text.push_str(&document::collect_text(&[PathBuf::from(file)]));
            }
        }
        Ok(all_text)
    }

    fn generator(&self, mode: GenerationMode, language: Language) -> Result<Box<dyn CardGenerator>> {
        match mode {
            GenerationMode::Heuristic => {
                let options = SynthesisOptions {
                    language,
                    ..self.config.synthesis_options()
                };
                Ok(Box::new(Synthesizer::new(options)))
            }
            GenerationMode::Ai => {
                let generator = OpenAiGenerator::new(self.config.ai.clone(), language)
                    .context("Failed to set up AI generation")?;
                Ok(Box::new(generator))
            }
        }
    }

    /// Extract, generate, and store cards in the requested deck
    pub fn generate(&mut self, args: &GenerateArgs) -> Result<Vec<Flashcard>> {
        let count = args
            .cards
            .map(|n| n as usize)
            .unwrap_or(self.config.cards);
        let mode = args.mode.unwrap_or(self.config.mode);
        let language = args.language.unwrap_or(self.config.language);

        let text = self.load_text(&args.files)?;
        if text.trim().is_empty() {
            bail!("Insufficient input: no text could be extracted from the given files");
        }

        log::info!(
            "Generating {} cards ({} mode, language {}) from {} chars",
            count,
            mode,
            language,
            text.len()
        );
        let generator = self.generator(mode, language)?;
        let cards = match generator.generate(&text, count) {
            Ok(cards) => cards,
            Err(e) => {
                if let Some(raw) = e.raw_output() {
                    eprintln!("Raw model output:\n{}", raw);
                }
                return Err(e).context(generation_failure(mode));
            }
        };

        if cards.is_empty() {
            bail!("Insufficient input: no flashcards could be generated");
        }

        self.session
            .select_deck(&args.deck)
            .with_context(|| format!("Invalid deck name '{}'", args.deck))?;
        self.session.store_generated(cards.clone())?;
        Ok(cards)
    }
}

fn generation_failure(mode: GenerationMode) -> &'static str {
    match mode {
        GenerationMode::Heuristic => "Heuristic generation failed",
        GenerationMode::Ai => "AI generation failed",
    }
}
