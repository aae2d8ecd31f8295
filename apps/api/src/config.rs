use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a sensible default, so a bare `cargo run` works.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional override for the bundled sentence-segmenter abbreviation
    /// list. When set, the file must exist and be non-empty.
    pub segmenter_abbreviations: Option<PathBuf>,
    /// Multipart upload cap in bytes.
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            segmenter_abbreviations: std::env::var("SEGMENTER_ABBREVIATIONS")
                .ok()
                .map(PathBuf::from),
            max_upload_bytes: std::env::var("MAX_UPLOAD_MB")
                .unwrap_or_else(|_| "16".to_string())
                .parse::<usize>()
                .map(|mb| mb * 1024 * 1024)
                .context("MAX_UPLOAD_MB must be a whole number of megabytes")?,
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            segmenter_abbreviations: None,
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}
