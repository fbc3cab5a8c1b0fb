use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Built once at startup; fails if `GEMINI_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub llm_timeout: Duration,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.prepare_upload_dir()?;
        Ok(config)
    }

    /// Creates `upload_dir` if needed and checks it is a writable directory,
    /// so a bad `UPLOAD_DIR` stops startup instead of failing every request.
    pub fn prepare_upload_dir(&self) -> Result<()> {
        let dir = &self.upload_dir;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create UPLOAD_DIR {}", dir.display()))?;
        tempfile::tempfile_in(dir)
            .with_context(|| format!("UPLOAD_DIR {} is not writable", dir.display()))?;
        Ok(())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be
    /// exercised without touching the process environment.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'GEMINI_API_KEY' is not set")?;

        let llm_timeout_secs = parse_or(&lookup, "LLM_TIMEOUT_SECS", 60u64)
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            gemini_api_key,
            gemini_model: lookup("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: lookup("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            port: parse_or(&lookup, "PORT", 3000u16).context("PORT must be a valid port number")?,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024usize)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for '{key}': {raw}")),
        None => Ok(default),
    }
}
