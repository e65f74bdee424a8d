/// Content classification and segmentation engine.
///
/// Turns a flat transcript into a structured outline: decides whether the
/// video is a tutorial, a list/ranking, or general narrative, then splits
/// the transcript into titled, timestamped sections accordingly. Pure over
/// the in-memory transcript; safe to run concurrently on independent
/// inputs.
pub mod classifier;
pub mod segmenter;
pub mod timestamp;
pub mod topics;
pub mod vocabulary;

use crate::config::AnalysisConfig;
use crate::transcript::Transcript;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

pub use classifier::TypeClassifier;
pub use segmenter::Segmenter;
pub use timestamp::format_timestamp;
pub use topics::TopicExtractor;
pub use vocabulary::Vocabulary;

/// Content category of a video, decided once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoCategory {
    /// Step-by-step instructional content
    Tutorial,
    /// Numbered list of ideas, tips, or rankings
    ListOfIdeas,
    /// Everything else: narrative, discussion, vlogs
    GeneralInfo,
}

impl fmt::Display for VideoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VideoCategory::Tutorial => "Tutorial",
            VideoCategory::ListOfIdeas => "List/Ideas",
            VideoCategory::GeneralInfo => "General Information",
        };
        write!(f, "{}", label)
    }
}

/// One titled, timestamped slice of the transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading ("Step 2", "Idea #3", "Section 1: Topic")
    pub title: String,
    /// Concatenated segment texts
    pub content: String,
    /// Clock label of the section start ("MM:SS" or "HH:MM:SS")
    pub timestamp: String,
}

/// Category plus ordered sections for one transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: VideoCategory,
    pub sections: Vec<Section>,
}

/// Coordinates the classifier and the matching segmenter
#[derive(Debug, Clone)]
pub struct ContentAnalyzer {
    classifier: TypeClassifier,
    segmenter: Segmenter,
}

impl ContentAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        let vocabulary = Vocabulary::new();
        Self {
            classifier: TypeClassifier::new(vocabulary.clone(), config.clone()),
            segmenter: Segmenter::new(vocabulary, config),
        }
    }

    /// Classify the video and segment its transcript into sections
    pub fn analyze(&self, title: &str, transcript: &Transcript) -> AnalysisResult {
        let category = self.classifier.classify(title, &transcript.text);
        info!("Detected video type: {}", category);

        let sections = match category {
            VideoCategory::Tutorial => self.segmenter.segment_tutorial(transcript),
            VideoCategory::ListOfIdeas => self.segmenter.segment_list(transcript),
            VideoCategory::GeneralInfo => self.segmenter.segment_time_based(transcript),
        };
        info!("Created {} sections", sections.len());

        AnalysisResult { category, sections }
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
