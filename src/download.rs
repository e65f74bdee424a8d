use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tracing::{info, warn};

use crate::config::DownloadConfig;

/// Video metadata reported by the downloader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub author: String,
    pub duration_seconds: f64,
    pub view_count: u64,
    pub url: String,
}

/// Downloads the audio stream of a YouTube video via yt-dlp
#[derive(Debug, Clone)]
pub struct AudioDownloader {
    config: DownloadConfig,
}

impl AudioDownloader {
    pub fn new(config: DownloadConfig) -> Self {
        Self { config }
    }

    /// Check that the downloader binary is on the PATH
    pub async fn check_available(&self) -> bool {
        Command::new(&self.config.binary)
            .arg("--version")
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Download the best audio stream into `output_dir` and return the
    /// audio file path plus the video metadata
    pub async fn download_audio(
        &self,
        url: &str,
        output_dir: &Path,
    ) -> Result<(PathBuf, VideoMetadata)> {
        if !self.check_available().await {
            return Err(anyhow!(
                "{} not found. Please install it to download videos",
                self.config.binary
            ));
        }

        info!("Fetching video and downloading audio stream...");

        let output_template = output_dir.join("audio.%(ext)s");
        let command = Command::new(&self.config.binary)
            .args([
                "-f",
                &self.config.audio_format,
                "--no-playlist",
                "--print-json",
                "-o",
            ])
            .arg(&output_template)
            .arg(url)
            .output();

        let output = tokio::time::timeout(
            Duration::from_secs(self.config.timeout_seconds),
            command,
        )
        .await
        .map_err(|_| {
            anyhow!(
                "Audio download timed out after {} seconds",
                self.config.timeout_seconds
            )
        })?
        .context("Failed to run the downloader")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "Audio download failed ({}): {}",
                output.status,
                stderr.trim()
            ));
        }

        let json_str = String::from_utf8(output.stdout)?;
        let info: serde_json::Value =
            serde_json::from_str(json_str.trim()).context("Failed to parse video metadata")?;

        let metadata = Self::parse_metadata(&info, url)?;
        let audio_path = self.resolve_audio_path(&info, output_dir).await?;

        info!("Title: {}", metadata.title);
        info!("Audio downloaded to: {}", audio_path.display());

        Ok((audio_path, metadata))
    }

    fn parse_metadata(info: &serde_json::Value, url: &str) -> Result<VideoMetadata> {
        let title = info["title"]
            .as_str()
            .ok_or_else(|| anyhow!("Video metadata is missing a title"))?
            .to_string();

        let author = info["uploader"]
            .as_str()
            .or_else(|| info["channel"].as_str())
            .unwrap_or("Unknown")
            .to_string();

        Ok(VideoMetadata {
            title,
            author,
            duration_seconds: info["duration"].as_f64().unwrap_or(0.0),
            view_count: info["view_count"].as_u64().unwrap_or(0),
            url: url.to_string(),
        })
    }

    /// The downloader reports the target filename; fall back to scanning
    /// the output directory when it does not
    async fn resolve_audio_path(
        &self,
        info: &serde_json::Value,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        if let Some(filename) = info["_filename"].as_str() {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Ok(path);
            }
            warn!("Reported audio file not found at {}, scanning", path.display());
        }

        let mut entries = tokio::fs::read_dir(output_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path
                .file_stem()
                .map_or(false, |stem| stem.to_string_lossy() == "audio")
            {
                return Ok(path);
            }
        }

        Err(anyhow!(
            "No audio file found in {}",
            output_dir.display()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_parsing() {
        let info = serde_json::json!({
            "title": "Top 5 Productivity Tips",
            "uploader": "Some Creator",
            "duration": 634.0,
            "view_count": 12345,
            "_filename": "audio.m4a",
        });

        let metadata =
            AudioDownloader::parse_metadata(&info, "https://youtu.be/abc123").unwrap();
        assert_eq!(metadata.title, "Top 5 Productivity Tips");
        assert_eq!(metadata.author, "Some Creator");
        assert_eq!(metadata.duration_seconds, 634.0);
        assert_eq!(metadata.view_count, 12345);
        assert_eq!(metadata.url, "https://youtu.be/abc123");
    }

    #[test]
    fn test_metadata_missing_title_is_error() {
        let info = serde_json::json!({ "uploader": "Someone" });
        assert!(AudioDownloader::parse_metadata(&info, "https://youtu.be/x").is_err());
    }

    #[test]
    fn test_metadata_defaults() {
        let info = serde_json::json!({ "title": "Untitled" });
        let metadata = AudioDownloader::parse_metadata(&info, "url").unwrap();
        assert_eq!(metadata.author, "Unknown");
        assert_eq!(metadata.view_count, 0);
    }
}
