use std::sync::OnceLock;

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "either",
    "etc", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "into", "is",
    "it", "its", "itself", "just", "may", "me", "might", "more", "most", "much", "must", "my",
    "myself", "no", "nor", "not", "now", "of", "off", "often", "on", "once", "one", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "same", "shall", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "thus", "to", "too", "under", "until",
    "up", "upon", "us", "very", "was", "we", "were", "what", "when", "where", "whether", "which",
    "while", "who", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet",
    "you", "your", "yours", "yourself", "yourselves",
];

const FRENCH: &[&str] = &[
    "a", "ai", "aie", "ainsi", "alors", "au", "aucun", "aussi", "autre", "aux", "avec", "avoir",
    "c", "ça", "car", "ce", "ceci", "cela", "celle", "celles", "celui", "ces", "cet", "cette",
    "ceux", "chaque", "chez", "comme", "comment", "d", "dans", "de", "des", "donc", "dont", "du",
    "elle", "elles", "en", "encore", "entre", "est", "et", "été", "être", "eu", "eux", "fait",
    "il", "ils", "j", "je", "l", "la", "le", "les", "leur", "leurs", "lui", "m", "ma", "mais",
    "me", "même", "mes", "moi", "mon", "n", "ne", "ni", "nos", "notre", "nous", "on", "ont",
    "ou", "où", "par", "pas", "peu", "peut", "plus", "pour", "qu", "quand", "que", "quel",
    "quelle", "quelles", "quels", "qui", "s", "sa", "sans", "se", "ses", "si", "son",
    "sont", "sous", "sur", "t", "ta", "te", "tes", "toi", "ton", "tous", "tout", "toute",
    "toutes", "très", "tu", "un", "une", "vos", "votre", "vous", "y",
];

fn english() -> &'static Vec<String> {
    static LIST: OnceLock<Vec<String>> = OnceLock::new();
    LIST.get_or_init(|| ENGLISH.iter().map(|w| w.to_string()).collect())
}

fn french() -> &'static Vec<String> {
    static LIST: OnceLock<Vec<String>> = OnceLock::new();
    LIST.get_or_init(|| FRENCH.iter().map(|w| w.to_string()).collect())
}

/// Stopword list for a language code, if the language is supported.
pub(crate) fn for_language(code: &str) -> Option<&'static Vec<String>> {
    match code.to_lowercase().as_str() {
        "en" | "english" => Some(english()),
        "fr" | "french" | "français" => Some(french()),
        _ => None,
    }
}

/// Whether the built-in ranker has stopwords for this language code
pub fn is_supported_language(code: &str) -> bool {
    for_language(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(for_language("EN").is_some());
        assert!(for_language("fr").unwrap().iter().any(|w| w == "les"));
        assert!(for_language("xx").is_none());
    }
}
