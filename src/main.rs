use anyhow::{anyhow, Result};
use clap::{Arg, Command};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

use yt2md::{Config, Pipeline};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("yt2md=info,warn")
        .init();

    let matches = Command::new("yt2md")
        .version("0.1.0")
        .about("YouTube video to structured Markdown summarizer")
        .arg(
            Arg::new("url")
                .value_name("URL")
                .help("YouTube video URL (prompted interactively when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .value_name("FILE")
                .help("Output Markdown filename (default: output.md)")
                .index(2),
        )
        .get_matches();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });
    config.validate()?;

    let raw_url = match matches.get_one::<String>("url") {
        Some(url) => url.clone(),
        None => prompt("Enter YouTube video URL: ")?,
    };
    let video_url = validate_video_url(&raw_url)?;

    let output_filename = match matches.get_one::<String>("output") {
        Some(name) => name.clone(),
        None => {
            let entered = prompt("Enter output filename (press Enter for 'output.md'): ")?;
            if entered.is_empty() {
                config.output.default_filename.clone()
            } else {
                entered
            }
        }
    };
    let output_path = ensure_md_extension(&output_filename);

    info!("Processing: {}", video_url);

    let pipeline = Pipeline::new(config);
    let result = pipeline.run(&video_url, &output_path).await?;

    info!("Success! Output file: {}", result.output_path.display());
    Ok(())
}

/// Read one trimmed line from stdin
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Accept only YouTube URLs; tolerate a missing scheme
fn validate_video_url(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(anyhow!("No URL provided"));
    }

    if !raw.contains("youtube.com") && !raw.contains("youtu.be") {
        return Err(anyhow!("Invalid YouTube URL: {}", raw));
    }

    let with_scheme = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    let parsed = Url::parse(&with_scheme).map_err(|e| anyhow!("Invalid URL {}: {}", raw, e))?;
    Ok(parsed.into())
}

/// Append `.md` when the filename lacks it
fn ensure_md_extension(filename: &str) -> PathBuf {
    if filename.ends_with(".md") {
        PathBuf::from(filename)
    } else {
        PathBuf::from(format!("{}.md", filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_youtube_urls() {
        assert!(validate_video_url("https://www.youtube.com/watch?v=abc").is_ok());
        assert!(validate_video_url("https://youtu.be/abc").is_ok());
        assert!(validate_video_url("youtube.com/watch?v=abc").is_ok());
    }

    #[test]
    fn test_invalid_urls_rejected() {
        assert!(validate_video_url("").is_err());
        assert!(validate_video_url("https://vimeo.com/12345").is_err());
        assert!(validate_video_url("not a url").is_err());
    }

    #[test]
    fn test_md_extension_enforced() {
        assert_eq!(ensure_md_extension("notes"), PathBuf::from("notes.md"));
        assert_eq!(ensure_md_extension("notes.md"), PathBuf::from("notes.md"));
    }
}
