/// YouTube to Markdown Summarizer
///
/// Downloads a YouTube video's audio, transcribes it, classifies the
/// content, and generates a structured Markdown document. The
/// classification and segmentation engine is pure Rust over the in-memory
/// transcript; download and transcription wrap external tools.
pub mod analysis;
pub mod config;
pub mod download;
pub mod markdown;
pub mod pipeline;
pub mod transcript;
pub mod transcription;

// Re-export main types for easy access
pub use crate::analysis::{
    AnalysisResult, ContentAnalyzer, Section, Segmenter, TopicExtractor, TypeClassifier,
    VideoCategory, Vocabulary,
};
pub use crate::config::Config;
pub use crate::download::{AudioDownloader, VideoMetadata};
pub use crate::markdown::MarkdownRenderer;
pub use crate::pipeline::{Pipeline, PipelineResult, PipelineStage};
pub use crate::transcript::{Transcript, TranscriptSegment};
pub use crate::transcription::Transcriber;
