use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tracing::{info, warn};

use crate::config::TranscriptionConfig;
use crate::transcript::{Transcript, TranscriptSegment};

/// Raw segment in the Whisper JSON output
#[derive(Debug, Deserialize)]
struct WhisperSegment {
    start: f64,
    end: f64,
    text: String,
}

/// Whisper JSON output shape
#[derive(Debug, Deserialize)]
struct WhisperOutput {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    segments: Vec<WhisperSegment>,
}

/// Transcribes an audio file with the Whisper CLI
#[derive(Debug, Clone)]
pub struct Transcriber {
    config: TranscriptionConfig,
}

impl Transcriber {
    pub fn new(config: TranscriptionConfig) -> Self {
        Self { config }
    }

    /// Check that the transcriber binary is on the PATH
    pub async fn check_available(&self) -> bool {
        Command::new(&self.config.binary)
            .arg("--help")
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Transcribe the audio file, writing intermediate output into
    /// `work_dir`, and return the parsed transcript
    pub async fn transcribe(&self, audio_path: &Path, work_dir: &Path) -> Result<Transcript> {
        if !self.check_available().await {
            return Err(anyhow!(
                "{} not found. Please install openai-whisper to transcribe audio",
                self.config.binary
            ));
        }

        info!(
            "Transcribing audio with model '{}' (this may take a few minutes)...",
            self.config.model
        );

        let mut command = Command::new(&self.config.binary);
        command
            .arg(audio_path)
            .args(["--model", &self.config.model])
            .args(["--output_format", "json"])
            .args(["--verbose", "False"])
            .arg("--output_dir")
            .arg(work_dir);

        if let Some(ref language) = self.config.language {
            command.args(["--language", language]);
        }

        let output = tokio::time::timeout(
            Duration::from_secs(self.config.timeout_seconds),
            command.output(),
        )
        .await
        .map_err(|_| {
            anyhow!(
                "Transcription timed out after {} seconds",
                self.config.timeout_seconds
            )
        })?
        .context("Failed to run the transcriber")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "Transcription failed ({}): {}",
                output.status,
                stderr.trim()
            ));
        }

        let json_path = self.find_json_output(work_dir).await?;
        let json_content = tokio::fs::read_to_string(&json_path).await?;
        let transcript = Self::parse_output(&json_content)?;

        info!(
            "Transcription completed: {} characters, {} segments",
            transcript.text.len(),
            transcript.segments.len()
        );

        Ok(transcript)
    }

    /// Locate the JSON file Whisper wrote next to the audio
    async fn find_json_output(&self, work_dir: &Path) -> Result<PathBuf> {
        let mut entries = tokio::fs::read_dir(work_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                return Ok(path);
            }
        }

        warn!("No JSON output in {}", work_dir.display());
        Err(anyhow!("Transcriber produced no JSON output"))
    }

    fn parse_output(json_content: &str) -> Result<Transcript> {
        let output: WhisperOutput =
            serde_json::from_str(json_content).context("Failed to parse transcriber output")?;

        let segments: Vec<TranscriptSegment> = output
            .segments
            .into_iter()
            .map(|seg| TranscriptSegment::new(seg.text.trim(), seg.start, seg.end))
            .collect();

        let text = output.text.unwrap_or_else(|| {
            segments
                .iter()
                .map(|seg| seg.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        });

        Ok(Transcript::new(text.trim(), segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whisper_output() {
        let json = r#"{
            "text": " tip number 1 write it down tip number 2 read it back",
            "segments": [
                {"id": 0, "start": 0.0, "end": 4.2, "text": " tip number 1 write it down"},
                {"id": 1, "start": 4.2, "end": 8.0, "text": " tip number 2 read it back"}
            ],
            "language": "en"
        }"#;

        let transcript = Transcriber::parse_output(json).unwrap();
        assert_eq!(transcript.segments.len(), 2);
        assert_eq!(transcript.segments[0].text, "tip number 1 write it down");
        assert_eq!(transcript.segments[0].start, 0.0);
        assert_eq!(transcript.segments[1].end, 8.0);
        assert!(transcript.text.starts_with("tip number 1"));
    }

    #[test]
    fn test_parse_output_without_text_joins_segments() {
        let json = r#"{
            "segments": [
                {"start": 0.0, "end": 2.0, "text": "hello"},
                {"start": 2.0, "end": 4.0, "text": "world"}
            ]
        }"#;

        let transcript = Transcriber::parse_output(json).unwrap();
        assert_eq!(transcript.text, "hello world");
    }

    #[test]
    fn test_parse_invalid_output_is_error() {
        assert!(Transcriber::parse_output("not json").is_err());
    }
}
