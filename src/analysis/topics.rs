use super::vocabulary::Vocabulary;
use std::collections::HashMap;

/// How much of the section text is inspected for the topic label
const ANALYSIS_WINDOW_CHARS: usize = 500;

/// Number of frequent words forming the label
const TOP_WORDS: usize = 3;

/// Number of words in the fallback label
const FALLBACK_WORDS: usize = 5;

/// Derives a short label for a block of text by picking its most frequent
/// meaningful words.
#[derive(Debug, Clone)]
pub struct TopicExtractor {
    vocabulary: Vocabulary,
}

impl TopicExtractor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Extract a topic label. Always returns a non-empty string: when no
    /// meaningful words survive filtering, falls back to the first few
    /// words of the text with an ellipsis.
    pub fn extract(&self, text: &str) -> String {
        let window: String = text.chars().take(ANALYSIS_WINDOW_CHARS).collect();
        let lowered = window.to_lowercase();

        // Count frequencies while remembering first-encounter order so
        // ties resolve deterministically
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for word in lowered.split(|c: char| !c.is_alphanumeric()) {
            if word.chars().count() <= 3 || self.vocabulary.is_stop_word(word) {
                continue;
            }
            let count = counts.entry(word).or_insert(0);
            if *count == 0 {
                order.push(word);
            }
            *count += 1;
        }

        if !order.is_empty() {
            // Stable sort keeps first-encountered words ahead on ties
            order.sort_by_key(|w| std::cmp::Reverse(counts[w]));
            let topic = order
                .iter()
                .take(TOP_WORDS)
                .map(|w| title_case(w))
                .collect::<Vec<_>>()
                .join(" ");
            if !topic.is_empty() {
                return topic;
            }
        }

        let fallback = window
            .split_whitespace()
            .take(FALLBACK_WORDS)
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}...", fallback)
    }
}

/// Upper-case the first character of a word, lower-case the rest
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> TopicExtractor {
        TopicExtractor::new(Vocabulary::new())
    }

    #[test]
    fn test_frequent_words_win() {
        let topic = extractor().extract(
            "compost compost compost garden garden soil soil soil soil weeds",
        );
        assert_eq!(topic, "Soil Compost Garden");
    }

    #[test]
    fn test_idempotent() {
        let text = "planting tomatoes requires patience and planting good soil";
        let first = extractor().extract(text);
        let second = extractor().extract(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_stop_words_fall_back_to_prefix() {
        let topic = extractor().extract("the a an is was");
        assert_eq!(topic, "The A An Is Was...");
    }

    #[test]
    fn test_short_words_filtered() {
        // every token is <= 3 chars, so the fallback applies
        let topic = extractor().extract("go up and out now");
        assert_eq!(topic, "Go Up And Out Now...");
    }

    #[test]
    fn test_always_non_empty() {
        assert!(!extractor().extract("").is_empty());
    }

    #[test]
    fn test_analysis_window_limits_input() {
        // the frequent word beyond 500 chars must not influence the label
        let mut text = "alpha ".repeat(100); // 600 chars of "alpha "
        text.push_str(&"omega ".repeat(50));
        let topic = extractor().extract(&text);
        assert!(topic.contains("Alpha"));
        assert!(!topic.contains("Omega"));
    }
}
