use super::vocabulary::Vocabulary;
use super::VideoCategory;
use crate::config::AnalysisConfig;
use tracing::debug;

/// Decides the content category of a video from its title and transcript
/// text by scoring against fixed keyword vocabularies. Pure and total:
/// always resolves, defaulting to general information.
#[derive(Debug, Clone)]
pub struct TypeClassifier {
    vocabulary: Vocabulary,
    config: AnalysisConfig,
}

impl TypeClassifier {
    pub fn new(vocabulary: Vocabulary, config: AnalysisConfig) -> Self {
        Self { vocabulary, config }
    }

    /// Classify a video from its title and full transcript text
    pub fn classify(&self, title: &str, transcript_text: &str) -> VideoCategory {
        let text = format!("{} {}", title, transcript_text).to_lowercase();

        let tutorial_score = self.vocabulary.tutorial_score(&text);
        let mut list_score = self.vocabulary.list_score(&text);

        // Heavy enumeration ("tip 1 ... tip 2 ...") is a strong list signal
        let enumerations = self.vocabulary.enumeration_matches(&text);
        if enumerations > self.config.enumeration_threshold {
            list_score += self.config.enumeration_bonus;
        }

        debug!(
            "Classification scores: tutorial={}, list={}, enumerations={}",
            tutorial_score, list_score, enumerations
        );

        if tutorial_score > list_score && tutorial_score >= self.config.min_tutorial_score {
            VideoCategory::Tutorial
        } else if list_score >= self.config.min_list_score {
            VideoCategory::ListOfIdeas
        } else {
            VideoCategory::GeneralInfo
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> TypeClassifier {
        TypeClassifier::new(Vocabulary::new(), AnalysisConfig::default())
    }

    #[test]
    fn test_tutorial_detection() {
        let category = classifier().classify(
            "How To Build a Workbench",
            "in this tutorial we go step by step through the build",
        );
        assert_eq!(category, VideoCategory::Tutorial);
    }

    #[test]
    fn test_list_detection() {
        let category = classifier().classify(
            "Top 10 Best Camping Spots",
            "here is my list of the best spots and the ways to reach them",
        );
        assert_eq!(category, VideoCategory::ListOfIdeas);
    }

    #[test]
    fn test_enumeration_bonus_pushes_to_list() {
        // no list keywords beyond the enumeration patterns themselves
        let category = classifier().classify(
            "My favorites",
            "tip 1 pack light. tip 2 arrive early. tip 3 hydrate. tip 4 stretch.",
        );
        assert_eq!(category, VideoCategory::ListOfIdeas);
    }

    #[test]
    fn test_general_fallback() {
        let category = classifier().classify(
            "A Day in the Mountains",
            "we walked along the ridge and watched the clouds roll in",
        );
        assert_eq!(category, VideoCategory::GeneralInfo);
    }

    #[test]
    fn test_tutorial_needs_minimum_score() {
        // a single tutorial keyword is not enough
        let category = classifier().classify("Guide", "nothing else matches here at all");
        assert_eq!(category, VideoCategory::GeneralInfo);
    }

    #[test]
    fn test_tutorial_wins_only_when_strictly_ahead() {
        // tutorial=2 ("tutorial", "guide") and list=2 ("method",
        // "technique"): the tie fails the strict tutorial comparison, and
        // list stays below its own threshold
        let category = classifier().classify(
            "Reference",
            "a tutorial guide covering the method and the technique",
        );
        assert_eq!(category, VideoCategory::GeneralInfo);
    }

    #[test]
    fn test_list_outscoring_tutorial_wins() {
        let category = classifier().classify(
            "Best guide",
            "the best guide with the best method and the best technique and ways to learn",
        );
        assert_eq!(category, VideoCategory::ListOfIdeas);
    }
}
