//! Question templates and the round-robin cycler that fills them.
//!
//! Placeholders use single braces (`{keyword}`, `{snippet}`). Each tier
//! supplies exactly the placeholders its templates use.

use std::sync::OnceLock;

use regex::Regex;

use crate::language::Language;

/// Fixed template lists for one locale
#[derive(Debug, Clone, Copy)]
pub struct TemplateSet {
    /// Concept tier, uses `{keyword}` and `{snippet}`
    pub concept: &'static [&'static str],
    /// Passage tier, uses `{snippet}`
    pub passage: &'static [&'static str],
    /// Sentence tier, uses `{snippet}`
    pub sentence: &'static [&'static str],
    /// Appended to concept answers, uses `{keyword}`
    pub key_concept: &'static str,
}

const ENGLISH: TemplateSet = TemplateSet {
    concept: &[
        "Explain the role of \"{keyword}\" in the following context: {snippet}",
        "Why is \"{keyword}\" important in this passage? {snippet}",
        "How would you define \"{keyword}\" based on this excerpt: {snippet}",
        "What would change if \"{keyword}\" were missing from this reasoning? {snippet}",
        "Which ideas does \"{keyword}\" connect in the following passage? {snippet}",
    ],
    passage: &[
        "Summarize the main idea of this passage: {snippet}",
        "What is the key argument developed here? {snippet}",
        "Which conclusion can you draw from this passage? {snippet}",
        "What evidence supports the claim made here? {snippet}",
    ],
    sentence: &[
        "Explain this statement in your own words: {snippet}",
        "Why is the following statement true? {snippet}",
        "What does this sentence imply? {snippet}",
    ],
    key_concept: "🔑 Key concept: {keyword}",
};

const FRENCH: TemplateSet = TemplateSet {
    concept: &[
        "Explique le rôle de « {keyword} » dans le contexte suivant : {snippet}",
        "Pourquoi « {keyword} » est-il important dans ce passage ? {snippet}",
        "Comment définirais-tu « {keyword} » à partir de cet extrait : {snippet}",
        "Que changerait l'absence de « {keyword} » dans ce raisonnement ? {snippet}",
        "Quelles idées « {keyword} » relie-t-il dans le passage suivant ? {snippet}",
    ],
    passage: &[
        "Résume l'idée principale de ce passage : {snippet}",
        "Quel est l'argument clé développé ici ? {snippet}",
        "Quelle conclusion peux-tu tirer de ce passage ? {snippet}",
        "Quels éléments appuient l'affirmation suivante ? {snippet}",
    ],
    sentence: &[
        "Explique cette affirmation avec tes propres mots : {snippet}",
        "Pourquoi l'affirmation suivante est-elle vraie ? {snippet}",
        "Que sous-entend cette phrase ? {snippet}",
    ],
    key_concept: "🔑 Concept clé : {keyword}",
};

impl TemplateSet {
    pub fn for_language(language: Language) -> &'static TemplateSet {
        match language {
            Language::English => &ENGLISH,
            Language::French => &FRENCH,
        }
    }
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("Invalid regex"))
}

/// Substitute `{name}` placeholders in a template.
///
/// Unknown placeholders are left untouched; shipped templates never have any.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &regex::Captures| {
            let name = &caps[1];
            match values.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => value.to_string(),
                None => {
                    debug_assert!(false, "unresolved placeholder {{{}}} in template", name);
                    caps[0].to_string()
                }
            }
        })
        .to_string()
}

/// Extract placeholder names from a template
pub fn placeholders(template: &str) -> Vec<String> {
    placeholder_regex()
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Round-robin cursor over a template list
#[derive(Debug, Clone)]
pub struct TemplateCycler<'a> {
    templates: &'a [&'a str],
    cursor: usize,
}

impl<'a> TemplateCycler<'a> {
    pub fn new(templates: &'a [&'a str]) -> Self {
        debug_assert!(!templates.is_empty(), "template list must not be empty");
        Self {
            templates,
            cursor: 0,
        }
    }

    /// Fill the next template in the cycle
    pub fn next(&mut self, values: &[(&str, &str)]) -> String {
        if self.templates.is_empty() {
            return String::new();
        }
        let template = self.templates[self.cursor % self.templates.len()];
        self.cursor += 1;
        substitute(template, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_sets() -> [&'static TemplateSet; 2] {
        [
            TemplateSet::for_language(Language::English),
            TemplateSet::for_language(Language::French),
        ]
    }

    fn assert_placeholders(templates: &[&str], allowed: &[&str]) {
        for template in templates {
            let names = placeholders(template);
            assert!(!names.is_empty(), "template without placeholder: {}", template);
            for name in names {
                assert!(allowed.contains(&name.as_str()), "{{{}}} in {}", name, template);
            }
        }
    }

    #[test]
    fn test_shipped_templates_match_their_tier() {
        for set in all_sets() {
            assert_placeholders(set.concept, &["keyword", "snippet"]);
            assert_placeholders(set.passage, &["snippet"]);
            assert_placeholders(set.sentence, &["snippet"]);
            assert_placeholders(&[set.key_concept], &["keyword"]);
        }
    }

    #[test]
    fn test_substitute() {
        let result = substitute("Define {keyword}: {snippet}", &[("keyword", "ATP"), ("snippet", "energy")]);
        assert_eq!(result, "Define ATP: energy");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let result = substitute("Q: {snippet}", &[("snippet", "literal {keyword} text")]);
        assert_eq!(result, "Q: literal {keyword} text");
    }

    #[test]
    fn test_cycler_wraps_around() {
        let templates = ["A {snippet}", "B {snippet}"];
        let mut cycler = TemplateCycler::new(&templates);
        let drawn: Vec<String> = (0..5).map(|_| cycler.next(&[("snippet", "x")])).collect();
        assert_eq!(drawn, vec!["A x", "B x", "A x", "B x", "A x"]);
    }

    #[test]
    fn test_cycler_covers_more_draws_than_templates() {
        let set = TemplateSet::for_language(Language::English);
        let mut cycler = TemplateCycler::new(set.sentence);
        let limit = set.sentence.len() * 3 + 1;
        for _ in 0..limit {
            let question = cycler.next(&[("snippet", "Water boils at 100 degrees.")]);
            assert!(!question.contains('{'), "unresolved: {}", question);
            assert!(question.ends_with("Water boils at 100 degrees."));
        }
    }
}
