use regex::Regex;
use std::collections::HashSet;

/// Fixed keyword and pattern tables driving classification and boundary
/// detection. The weights are hand-tuned heuristics, kept as data so they
/// can be adjusted without touching the decision logic.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Tutorial cue terms (term, weight), matched by substring containment
    tutorial_terms: Vec<(&'static str, u32)>,

    /// List/ranking cue terms (term, weight)
    list_terms: Vec<(&'static str, u32)>,

    /// Enumeration pattern ("number 3", "tip 2", "4.") counted for the
    /// list-score bonus
    enumeration: Regex,

    /// Patterns that open a new tutorial step
    tutorial_boundaries: Vec<Regex>,

    /// Patterns that open a new list item
    list_boundaries: Vec<Regex>,

    /// Common English function words ignored by topic extraction
    stop_words: HashSet<&'static str>,
}

impl Vocabulary {
    pub fn new() -> Self {
        let tutorial_terms = vec![
            ("how to", 1),
            ("tutorial", 1),
            ("build", 1),
            ("make", 1),
            ("create", 1),
            ("diy", 1),
            ("step by step", 1),
            ("instructions", 1),
            ("guide", 1),
            ("install", 1),
            ("setup", 1),
            ("first", 1),
            ("second", 1),
            ("third", 1),
            ("next step", 1),
            ("finally", 1),
        ];

        let list_terms = vec![
            ("top 10", 1),
            ("top 5", 1),
            ("ideas for", 1),
            ("suggestions", 1),
            ("list of", 1),
            ("best", 1),
            ("ways to", 1),
            ("things you", 1),
            ("number", 1),
            ("idea number", 1),
            ("tip number", 1),
            ("method", 1),
            ("technique", 1),
        ];

        let enumeration =
            Regex::new(r"\b(number \d+|tip \d+|idea \d+|step \d+|\d+\.)").unwrap();

        let tutorial_boundaries = vec![
            Regex::new(r"\b(step \d+)").unwrap(),
            Regex::new(r"\b(first|second|third|fourth|fifth|next|then|finally|lastly)").unwrap(),
            Regex::new(r"\b(number \d+)").unwrap(),
        ];

        let list_boundaries = vec![
            Regex::new(r"\b(number \d+)").unwrap(),
            Regex::new(r"\b(idea \d+)").unwrap(),
            Regex::new(r"\b(tip \d+)").unwrap(),
            Regex::new(r"\b(\d+\.)").unwrap(),
            Regex::new(r"\b(first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth)")
                .unwrap(),
        ];

        let stop_words: HashSet<&'static str> = [
            "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
            "with", "by", "from", "as", "is", "was", "are", "were", "be", "been",
            "being", "have", "has", "had", "do", "does", "did", "will", "would",
            "could", "should", "may", "might", "can", "this", "that", "these",
            "those", "i", "you", "he", "she", "it", "we", "they",
        ]
        .into_iter()
        .collect();

        Self {
            tutorial_terms,
            list_terms,
            enumeration,
            tutorial_boundaries,
            list_boundaries,
            stop_words,
        }
    }

    /// Sum the weights of tutorial terms present in the text. Each term
    /// counts at most once, by substring containment.
    pub fn tutorial_score(&self, text: &str) -> u32 {
        Self::score_terms(&self.tutorial_terms, text)
    }

    /// Sum the weights of list terms present in the text.
    pub fn list_score(&self, text: &str) -> u32 {
        Self::score_terms(&self.list_terms, text)
    }

    /// Number of enumeration pattern matches ("number 3", "tip 2", "4.")
    pub fn enumeration_matches(&self, text: &str) -> usize {
        self.enumeration.find_iter(text).count()
    }

    /// Does this segment text open a new tutorial step?
    pub fn is_tutorial_boundary(&self, text: &str) -> bool {
        self.tutorial_boundaries.iter().any(|p| p.is_match(text))
    }

    /// Does this segment text open a new list item?
    pub fn is_list_boundary(&self, text: &str) -> bool {
        self.list_boundaries.iter().any(|p| p.is_match(text))
    }

    /// Is this a function word that topic extraction should ignore?
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn score_terms(terms: &[(&str, u32)], text: &str) -> u32 {
        terms
            .iter()
            .filter(|(term, _)| text.contains(term))
            .map(|(_, weight)| *weight)
            .sum()
    }

    /// Term counts, mostly for logging
    pub fn stats(&self) -> VocabularyStats {
        VocabularyStats {
            tutorial_terms: self.tutorial_terms.len(),
            list_terms: self.list_terms.len(),
            stop_words: self.stop_words.len(),
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VocabularyStats {
    pub tutorial_terms: usize,
    pub list_terms: usize,
    pub stop_words: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_presence_counts_once() {
        let vocab = Vocabulary::new();
        // "tutorial" appears twice but scores once
        assert_eq!(vocab.tutorial_score("tutorial about a tutorial"), 1);
    }

    #[test]
    fn test_enumeration_matches() {
        let vocab = Vocabulary::new();
        let text = "tip 1 is good, tip 2 is better, and number 3 wins. 4. profit";
        assert_eq!(vocab.enumeration_matches(text), 4);
    }

    #[test]
    fn test_tutorial_boundaries() {
        let vocab = Vocabulary::new();
        assert!(vocab.is_tutorial_boundary("step 2 is where we drill the holes"));
        assert!(vocab.is_tutorial_boundary("then we sand everything down"));
        assert!(!vocab.is_tutorial_boundary("keep sanding until smooth"));
    }

    #[test]
    fn test_list_boundaries() {
        let vocab = Vocabulary::new();
        assert!(vocab.is_list_boundary("idea 4 is my favorite"));
        assert!(vocab.is_list_boundary("3. take more breaks"));
        assert!(!vocab.is_list_boundary("this one is my favorite"));
    }

    #[test]
    fn test_stop_words() {
        let vocab = Vocabulary::new();
        assert!(vocab.is_stop_word("the"));
        assert!(vocab.is_stop_word("they"));
        assert!(!vocab.is_stop_word("woodworking"));
    }
}
