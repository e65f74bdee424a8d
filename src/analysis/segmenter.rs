use super::timestamp::format_timestamp;
use super::topics::TopicExtractor;
use super::vocabulary::Vocabulary;
use super::Section;
use crate::config::AnalysisConfig;
use crate::transcript::{Transcript, TranscriptSegment};
use tracing::debug;

/// Splits a transcript into titled, timestamped sections.
///
/// The tutorial and list variants walk the segments looking for boundary
/// patterns ("step 3", "idea 2", ordinals); the time-based variant cuts the
/// transcript into roughly equal slices and labels each with an extracted
/// topic. All variants preserve every segment exactly once, in order.
#[derive(Debug, Clone)]
pub struct Segmenter {
    vocabulary: Vocabulary,
    topics: TopicExtractor,
    config: AnalysisConfig,
}

/// Section under construction during a fold over the segments
#[derive(Debug, Default)]
struct PendingSection {
    texts: Vec<String>,
    /// Start of the first segment in this buffer, set once
    start: Option<f64>,
}

impl PendingSection {
    fn begin(segment: &TranscriptSegment) -> Self {
        Self {
            texts: vec![segment.text.trim().to_string()],
            start: Some(segment.start),
        }
    }

    fn push(&mut self, segment: &TranscriptSegment) {
        self.texts.push(segment.text.trim().to_string());
        self.start.get_or_insert(segment.start);
    }

    fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    fn flush(self, title: String) -> Section {
        Section {
            title,
            content: self.texts.join(" "),
            timestamp: format_timestamp(self.start.unwrap_or(0.0)),
        }
    }
}

impl Segmenter {
    pub fn new(vocabulary: Vocabulary, config: AnalysisConfig) -> Self {
        let topics = TopicExtractor::new(vocabulary.clone());
        Self {
            vocabulary,
            topics,
            config,
        }
    }

    /// Split a tutorial transcript at step boundaries ("step 2", ordinal
    /// and transition words), titling sections `Step {n}`. Falls back to
    /// time-based segmentation when fewer than 2 steps are found.
    pub fn segment_tutorial(&self, transcript: &Transcript) -> Vec<Section> {
        let sections = self.fold_boundaries(
            &transcript.segments,
            |text| self.vocabulary.is_tutorial_boundary(text),
            |n| format!("Step {}", n),
        );

        if sections.len() < 2 {
            debug!("Too few tutorial steps detected, using time-based sections");
            return self.segment_time_based(transcript);
        }

        sections
    }

    /// Split a list transcript at item boundaries ("idea 3", "tip 1",
    /// ordinals), titling sections `Idea #{n}`. Falls back to time-based
    /// segmentation with list titles when fewer than 2 items are found.
    pub fn segment_list(&self, transcript: &Transcript) -> Vec<Section> {
        let sections = self.fold_boundaries(
            &transcript.segments,
            |text| self.vocabulary.is_list_boundary(text),
            |n| format!("Idea #{}", n),
        );

        if sections.len() < 2 {
            debug!("Too few list items detected, using time-based sections");
            let mut sections = self.segment_time_based(transcript);
            for (i, section) in sections.iter_mut().enumerate() {
                section.title = format!("Idea #{}", i + 1);
            }
            return sections;
        }

        sections
    }

    /// Split a transcript into roughly equal time slices, one per
    /// `section_length_seconds`, bounded to `[min_sections, max_sections]`
    /// slices. Each slice is titled with its extracted topic.
    pub fn segment_time_based(&self, transcript: &Transcript) -> Vec<Section> {
        if transcript.segments.is_empty() {
            return vec![Section {
                title: "Content".to_string(),
                content: transcript.text.clone(),
                timestamp: format_timestamp(0.0),
            }];
        }

        let duration = transcript.duration();
        let target = ((duration / self.config.section_length_seconds) as usize)
            .clamp(self.config.min_sections, self.config.max_sections);
        let section_duration = duration / target as f64;

        debug!(
            "Time-based segmentation: duration={:.1}s, target={} sections",
            duration, target
        );

        let mut sections = Vec::new();
        let mut texts: Vec<String> = Vec::new();
        let mut section_start = 0.0;

        for segment in &transcript.segments {
            texts.push(segment.text.trim().to_string());

            if segment.end >= section_start + section_duration {
                sections.push(self.topic_section(&texts, sections.len() + 1, section_start));
                texts.clear();
                section_start = segment.end;
            }
        }

        if !texts.is_empty() {
            sections.push(self.topic_section(&texts, sections.len() + 1, section_start));
        }

        sections
    }

    fn topic_section(&self, texts: &[String], number: usize, start: f64) -> Section {
        let content = texts.join(" ");
        let topic = self.topics.extract(&content);
        Section {
            title: format!("Section {}: {}", number, topic),
            content,
            timestamp: format_timestamp(start),
        }
    }

    /// Fold the segments into sections, flushing the pending buffer
    /// whenever a boundary pattern appears in a segment's lower-cased
    /// text. The buffer must be non-empty for a boundary to trigger, so
    /// the very first segment never opens with a flush.
    fn fold_boundaries(
        &self,
        segments: &[TranscriptSegment],
        is_boundary: impl Fn(&str) -> bool,
        title: impl Fn(usize) -> String,
    ) -> Vec<Section> {
        let (mut sections, pending) = segments.iter().fold(
            (Vec::new(), PendingSection::default()),
            |(mut sections, mut pending), segment| {
                let lowered = segment.text.to_lowercase();

                if !pending.is_empty() && is_boundary(&lowered) {
                    let number = sections.len() + 1;
                    sections.push(pending.flush(title(number)));
                    (sections, PendingSection::begin(segment))
                } else {
                    pending.push(segment);
                    (sections, pending)
                }
            },
        );

        if !pending.is_empty() {
            let number = sections.len() + 1;
            sections.push(pending.flush(title(number)));
        }

        sections
    }
}
