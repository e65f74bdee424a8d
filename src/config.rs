use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the YouTube to Markdown summarizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Audio download settings
    pub download: DownloadConfig,

    /// Transcription settings
    pub transcription: TranscriptionConfig,

    /// Content analysis heuristics
    pub analysis: AnalysisConfig,

    /// Output settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Downloader binary name
    pub binary: String,

    /// Format selector passed to the downloader
    pub audio_format: String,

    /// Timeout for the download in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionConfig {
    /// Transcriber binary name
    pub binary: String,

    /// Whisper model to use
    pub model: String,

    /// Language hint, None for auto-detection
    pub language: Option<String>,

    /// Timeout for transcription in seconds
    pub timeout_seconds: u64,
}

/// Tunable thresholds behind the classification and segmentation
/// heuristics. These feed the fixed keyword tables; changing them does not
/// require code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum tutorial score required to classify as a tutorial
    pub min_tutorial_score: u32,

    /// Minimum list score required to classify as a list of ideas
    pub min_list_score: u32,

    /// Bonus added to the list score when enumeration patterns dominate
    pub enumeration_bonus: u32,

    /// Enumeration matches must exceed this count for the bonus to apply
    pub enumeration_threshold: usize,

    /// Target length of one time-based section in seconds
    pub section_length_seconds: f64,

    /// Lower bound on the time-based section count
    pub min_sections: usize,

    /// Upper bound on the time-based section count
    pub max_sections: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output filename when none is given
    pub default_filename: String,

    /// Log level filter
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download: DownloadConfig::default(),
            transcription: TranscriptionConfig::default(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            binary: "yt-dlp".to_string(),
            audio_format: "bestaudio".to_string(),
            timeout_seconds: 300,
        }
    }
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            binary: "whisper".to_string(),
            model: "base".to_string(),
            language: None,
            timeout_seconds: 1800,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_tutorial_score: 2,
            min_list_score: 3,
            enumeration_bonus: 3,
            enumeration_threshold: 3,
            section_length_seconds: 120.0,
            min_sections: 3,
            max_sections: 8,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_filename: "output.md".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the first config file found, falling back
    /// to environment overrides on defaults
    pub fn load() -> Result<Self> {
        let config_paths = ["yt2md.toml", "config/yt2md.toml"];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(config) => {
                        tracing::info!("Loaded configuration from: {}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    /// Defaults with environment variable overrides
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(model) = std::env::var("YT2MD_WHISPER_MODEL") {
            config.transcription.model = model;
        }

        if let Ok(language) = std::env::var("YT2MD_LANGUAGE") {
            config.transcription.language = Some(language);
        }

        if let Ok(log_level) = std::env::var("YT2MD_LOG_LEVEL") {
            config.output.log_level = log_level;
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path, config_str)?;
        tracing::info!("Configuration saved to: {}", path);
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.analysis.min_sections == 0 {
            return Err(anyhow!("min_sections must be greater than 0"));
        }

        if self.analysis.max_sections < self.analysis.min_sections {
            return Err(anyhow!("max_sections must be >= min_sections"));
        }

        if self.analysis.section_length_seconds <= 0.0 {
            return Err(anyhow!("section_length_seconds must be positive"));
        }

        if self.transcription.model.is_empty() {
            return Err(anyhow!("transcription model must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.min_sections, 3);
        assert_eq!(config.analysis.max_sections, 8);
    }

    #[test]
    fn test_invalid_section_bounds_rejected() {
        let mut config = Config::default();
        config.analysis.max_sections = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.output.default_filename, "output.md");
    }
}
