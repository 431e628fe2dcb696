//! Tiered flashcard synthesis.
//!
//! Cards are produced by three producers, each run only while the quota is
//! still unmet:
//! 1. Concept cards from ranked keyphrases and their supporting paragraph
//! 2. Passage cards from paragraphs, recycled cyclically if needed
//! 3. Sentence cards from the normalized text, recycled until the quota is met
//!
//! The last tier always fills the quota for non-blank input, so the output
//! has exactly `n` cards whenever there is any text at all.

use crate::keyphrase::{KeyphraseRanker, RankOptions, YakeExtractor};
use crate::language::Language;
use crate::text::{normalize, shorten, split_paragraphs, split_sentences};

use super::models::{Concept, Flashcard};
use super::summarize::{locate_context, summarize, SummaryOptions};
use super::templates::{substitute, TemplateCycler, TemplateSet};

/// Minimum number of phrases requested from the ranker.
const MIN_RANKED_PHRASES: usize = 20;

/// Maximum words per ranked phrase.
const MAX_PHRASE_WORDS: usize = 3;

/// Concepts requested per card, so weak phrases can be skipped.
const CONCEPTS_PER_CARD: usize = 3;

/// Tunables for a synthesis run
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOptions {
    pub language: Language,
    pub summary: SummaryOptions,
    /// Snippet length for concept questions
    pub concept_snippet_chars: usize,
    /// Snippet length for the first pass over paragraphs
    pub passage_snippet_chars: usize,
    /// Snippet length when paragraphs are recycled
    pub recycled_snippet_chars: usize,
    /// Snippet length for sentence questions
    pub sentence_snippet_chars: usize,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            summary: SummaryOptions::default(),
            concept_snippet_chars: 220,
            passage_snippet_chars: 200,
            recycled_snippet_chars: 160,
            sentence_snippet_chars: 160,
        }
    }
}

/// Heuristic flashcard generator
pub struct Synthesizer<R = YakeExtractor> {
    ranker: R,
    options: SynthesisOptions,
}

impl Synthesizer<YakeExtractor> {
    pub fn new(options: SynthesisOptions) -> Self {
        Self::with_ranker(YakeExtractor::new(), options)
    }
}

impl Default for Synthesizer<YakeExtractor> {
    fn default() -> Self {
        Self::new(SynthesisOptions::default())
    }
}

impl<R: KeyphraseRanker> Synthesizer<R> {
    pub fn with_ranker(ranker: R, options: SynthesisOptions) -> Self {
        Self { ranker, options }
    }

    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Produce exactly `n` cards from `text`, or none if the text is blank.
    pub fn synthesize(&self, text: &str, n: usize) -> Vec<Flashcard> {
        let cleaned = normalize(text);
        if cleaned.is_empty() || n == 0 {
            return Vec::new();
        }

        let paragraphs: Vec<String> = split_paragraphs(text)
            .iter()
            .map(|p| normalize(p))
            .filter(|p| !p.is_empty())
            .collect();
        let templates = TemplateSet::for_language(self.options.language);

        let concepts = extract_concepts(
            &self.ranker,
            &cleaned,
            &paragraphs,
            n * CONCEPTS_PER_CARD,
            self.options.language,
        );
        let mut cards = self.concept_cards(concepts, templates, n);
        let from_concepts = cards.len();

        if cards.len() < n {
            let remaining = n - cards.len();
            cards.extend(self.passage_cards(&paragraphs, templates, remaining));
        }
        let from_passages = cards.len() - from_concepts;

        if cards.len() < n {
            let remaining = n - cards.len();
            cards.extend(self.sentence_cards(&cleaned, templates, remaining));
        }
        let from_sentences = cards.len() - from_concepts - from_passages;

        log::debug!(
            "Synthesized {} cards ({} concept, {} passage, {} sentence)",
            cards.len(),
            from_concepts,
            from_passages,
            from_sentences
        );

        cards.truncate(n);
        cards
    }

    fn concept_cards(
        &self,
        mut concepts: Vec<Concept>,
        templates: &TemplateSet,
        limit: usize,
    ) -> Vec<Flashcard> {
        if limit == 0 {
            return Vec::new();
        }

        concepts.sort_by(|a, b| a.score.total_cmp(&b.score));

        let mut cycler = TemplateCycler::new(templates.concept);
        concepts
            .iter()
            .take(limit)
            .map(|concept| {
                let snippet = shorten(&concept.context, self.options.concept_snippet_chars);
                let question = cycler.next(&[
                    ("keyword", concept.keyword.as_str()),
                    ("snippet", snippet.as_str()),
                ]);
                let summary = summarize(
                    &concept.context,
                    Some(concept.keyword.as_str()),
                    &self.options.summary,
                );
                let note = substitute(templates.key_concept, &[("keyword", concept.keyword.as_str())]);
                Flashcard::new(question, format!("{}\n\n{}", summary, note))
            })
            .collect()
    }

    fn passage_cards(
        &self,
        paragraphs: &[String],
        templates: &TemplateSet,
        limit: usize,
    ) -> Vec<Flashcard> {
        if limit == 0 || paragraphs.is_empty() {
            return Vec::new();
        }

        let mut cycler = TemplateCycler::new(templates.passage);
        let mut cards = Vec::with_capacity(limit);

        for paragraph in paragraphs.iter().take(limit) {
            let snippet = shorten(paragraph, self.options.passage_snippet_chars);
            let question = cycler.next(&[("snippet", snippet.as_str())]);
            cards.push(Flashcard::new(
                question,
                summarize(paragraph, None, &self.options.summary),
            ));
        }

        // Not enough paragraphs: ask about them again with the next templates
        for paragraph in paragraphs.iter().cycle().take(limit - cards.len()) {
            let snippet = shorten(paragraph, self.options.recycled_snippet_chars);
            let question = cycler.next(&[("snippet", snippet.as_str())]);
            cards.push(Flashcard::new(
                question,
                summarize(paragraph, None, &self.options.summary),
            ));
        }

        cards
    }

    fn sentence_cards(&self, cleaned: &str, templates: &TemplateSet, limit: usize) -> Vec<Flashcard> {
        let sentences = split_sentences(cleaned);
        if limit == 0 || sentences.is_empty() {
            return Vec::new();
        }

        let mut cycler = TemplateCycler::new(templates.sentence);
        sentences
            .iter()
            .cycle()
            .take(limit)
            .map(|sentence| {
                let snippet = shorten(sentence, self.options.sentence_snippet_chars);
                let question = cycler.next(&[("snippet", snippet.as_str())]);
                Flashcard::new(question, summarize(sentence, None, &self.options.summary))
            })
            .collect()
    }
}

/// Rank keyphrases and attach the paragraph that supports each one.
///
/// A failing ranker is not fatal: the failure is logged and no concepts are
/// returned, which lets the lower tiers fill the quota.
pub fn extract_concepts<R: KeyphraseRanker + ?Sized>(
    ranker: &R,
    cleaned: &str,
    paragraphs: &[String],
    target: usize,
    language: Language,
) -> Vec<Concept> {
    let options = RankOptions {
        language: language.code().to_string(),
        max_ngram: MAX_PHRASE_WORDS,
        top: target.max(MIN_RANKED_PHRASES),
    };

    let phrases = match ranker.rank(cleaned, &options) {
        Ok(phrases) => phrases,
        Err(e) => {
            log::warn!("Keyphrase extraction failed, skipping concept cards: {}", e);
            Vec::new()
        }
    };

    phrases
        .into_iter()
        .filter_map(|phrase| {
            let keyword = phrase.phrase.trim();
            if keyword.is_empty() {
                return None;
            }
            Some(Concept {
                keyword: keyword.to_string(),
                score: phrase.score,
                context: locate_context(keyword, paragraphs, cleaned),
            })
        })
        .collect()
}

/// Produce exactly `n` cards from `text` with default options.
pub fn synthesize(text: &str, n: usize) -> Vec<Flashcard> {
    Synthesizer::default().synthesize(text, n)
}
