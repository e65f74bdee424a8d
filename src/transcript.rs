use serde::{Deserialize, Serialize};

/// One time-coded slice of speech as produced by the transcriber.
///
/// Segments are expected to be ordered by start time, non-overlapping, and
/// contiguous over the whole duration. That is a precondition of the
/// analysis stage and is not re-validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Transcribed text
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Complete transcript for one video: the full text plus its time-coded
/// segments. Immutable once produced by the transcription stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Full transcription text
    pub text: String,
    /// Individual segments with timestamps
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    pub fn new(text: impl Into<String>, segments: Vec<TranscriptSegment>) -> Self {
        Self {
            text: text.into(),
            segments,
        }
    }

    /// Total spoken duration, taken from the last segment's end time
    pub fn duration(&self) -> f64 {
        self.segments.last().map(|s| s.end).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_last_segment() {
        let transcript = Transcript::new(
            "hello world",
            vec![
                TranscriptSegment::new("hello", 0.0, 2.5),
                TranscriptSegment::new("world", 2.5, 5.0),
            ],
        );
        assert_eq!(transcript.duration(), 5.0);
    }

    #[test]
    fn test_empty_transcript_duration() {
        let transcript = Transcript::new("", Vec::new());
        assert_eq!(transcript.duration(), 0.0);
    }
}
