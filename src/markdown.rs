use anyhow::Result;
use regex::Regex;
use std::path::Path;
use tracing::info;

use crate::analysis::{format_timestamp, Section, VideoCategory};
use crate::download::VideoMetadata;

/// Sentences per rendered paragraph
const PARAGRAPH_SENTENCES: usize = 3;

/// Renders the analysis result as a Markdown document
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    sentence_pattern: Regex,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            // a run of text up to (and including) its terminal punctuation
            sentence_pattern: Regex::new(r"[^.!?]+[.!?]*").unwrap(),
        }
    }

    /// Render the full document
    pub fn render(
        &self,
        metadata: &VideoMetadata,
        category: VideoCategory,
        sections: &[Section],
    ) -> String {
        let mut doc = String::new();

        doc.push_str(&format!("# {}\n\n", metadata.title));

        doc.push_str("## Video Information\n\n");
        doc.push_str(&format!("- **Creator:** {}\n", metadata.author));
        doc.push_str(&format!(
            "- **Duration:** {}\n",
            format_timestamp(metadata.duration_seconds)
        ));
        doc.push_str(&format!("- **URL:** [{}]({})\n\n", metadata.url, metadata.url));

        doc.push_str("## Summary\n\n");
        doc.push_str(Self::summary_sentence(category));
        doc.push_str("\n\n---\n\n");

        doc.push_str("## Content\n\n");
        for section in sections {
            doc.push_str(&format!(
                "### {} `[{}]`\n\n",
                section.title, section.timestamp
            ));

            for paragraph in self.wrap_paragraphs(&section.content) {
                doc.push_str(&paragraph);
                doc.push_str("\n\n");
            }

            doc.push_str("---\n\n");
        }

        doc.push_str("\n*Generated by yt2md*\n");
        doc
    }

    /// Render and write the document to `path`
    pub async fn write_to_file(
        &self,
        path: &Path,
        metadata: &VideoMetadata,
        category: VideoCategory,
        sections: &[Section],
    ) -> Result<()> {
        let document = self.render(metadata, category, sections);
        tokio::fs::write(path, document).await?;
        info!("Markdown written to: {}", path.display());
        Ok(())
    }

    fn summary_sentence(category: VideoCategory) -> &'static str {
        match category {
            VideoCategory::Tutorial => {
                "This document provides a structured summary of the tutorial, \
                 organized as step-by-step instructions."
            }
            VideoCategory::ListOfIdeas => {
                "This document provides a structured summary of the video, \
                 organized as a list of ideas/suggestions."
            }
            VideoCategory::GeneralInfo => {
                "This document provides a structured summary of the video, \
                 organized into chronological sections."
            }
        }
    }

    /// Split text into sentences on terminal punctuation. Deliberately
    /// simple: abbreviations are not special-cased.
    fn split_sentences(&self, text: &str) -> Vec<String> {
        self.sentence_pattern
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Group sentences into paragraphs of a few sentences each
    fn wrap_paragraphs(&self, text: &str) -> Vec<String> {
        self.split_sentences(text.trim())
            .chunks(PARAGRAPH_SENTENCES)
            .map(|chunk| chunk.join(" "))
            .collect()
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
