//! Heuristic flashcard generation for flashdeck
//!
//! This module provides:
//! - Card and concept models
//! - Context lookup and extractive summaries for answers
//! - Localized question templates and their round-robin cycler
//! - The tiered synthesizer (concept, passage, sentence)

pub mod models;
pub mod summarize;
pub mod synthesizer;
pub mod templates;

pub use models::*;
pub use summarize::{locate_context, summarize, SummaryOptions};
pub use synthesizer::{extract_concepts, synthesize, SynthesisOptions, Synthesizer};
pub use templates::{TemplateCycler, TemplateSet};
