use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::analysis::{ContentAnalyzer, VideoCategory};
use crate::config::Config;
use crate::download::{AudioDownloader, VideoMetadata};
use crate::markdown::MarkdownRenderer;
use crate::transcription::Transcriber;

/// Stages of a single run, recorded for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStage {
    Download,
    Transcription,
    Analysis,
    Rendering,
}

/// Outcome of one successful run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub metadata: VideoMetadata,
    pub category: VideoCategory,
    pub section_count: usize,
    pub output_path: PathBuf,
    pub processing_time: Duration,
    pub stages_completed: Vec<PipelineStage>,
}

/// End-to-end pipeline: download audio, transcribe it, analyze the
/// transcript, and write the Markdown document. Upstream failures abort
/// the run before the analysis stage executes.
pub struct Pipeline {
    downloader: AudioDownloader,
    transcriber: Transcriber,
    analyzer: ContentAnalyzer,
    renderer: MarkdownRenderer,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self {
            downloader: AudioDownloader::new(config.download),
            transcriber: Transcriber::new(config.transcription),
            analyzer: ContentAnalyzer::new(config.analysis),
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Process one video URL into a Markdown file at `output_path`.
    /// Temporary audio files are removed when the run ends, whether it
    /// succeeded or not.
    pub async fn run(&self, url: &str, output_path: &Path) -> Result<PipelineResult> {
        let start_time = Instant::now();
        let mut stages_completed = Vec::new();

        // Working directory for audio and transcriber output, removed on
        // drop
        let work_dir = tempfile::tempdir().context("Failed to create working directory")?;

        let (audio_path, metadata) = self
            .downloader
            .download_audio(url, work_dir.path())
            .await
            .context("Audio download failed")?;
        stages_completed.push(PipelineStage::Download);

        let transcript = self
            .transcriber
            .transcribe(&audio_path, work_dir.path())
            .await
            .context("Transcription failed")?;
        stages_completed.push(PipelineStage::Transcription);

        info!("Structuring content...");
        let analysis = self.analyzer.analyze(&metadata.title, &transcript);
        stages_completed.push(PipelineStage::Analysis);

        self.renderer
            .write_to_file(output_path, &metadata, analysis.category, &analysis.sections)
            .await
            .context("Markdown generation failed")?;
        stages_completed.push(PipelineStage::Rendering);

        if let Err(e) = work_dir.close() {
            warn!("Could not remove temporary files: {}", e);
        } else {
            info!("Temporary files cleaned up");
        }

        let result = PipelineResult {
            metadata,
            category: analysis.category,
            section_count: analysis.sections.len(),
            output_path: output_path.to_path_buf(),
            processing_time: start_time.elapsed(),
            stages_completed,
        };

        info!(
            "Completed in {:.1}s: {} ({} sections) -> {}",
            result.processing_time.as_secs_f64(),
            result.category,
            result.section_count,
            result.output_path.display()
        );

        Ok(result)
    }
}
