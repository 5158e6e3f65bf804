use std::path::PathBuf;

use anyhow::{Context, Result};
use secrecy::Secret;

/// Application configuration loaded from environment variables.
/// Fails at startup if the completion backend credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Secret<String>,
    pub port: u16,
    pub rust_log: String,
    /// Directory holding `index.html` and the front-end assets.
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: Secret::new(require_env("OPENAI_API_KEY")?),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_static_dir()),
        })
    }
}

/// The crate's own `static/` directory, independent of the working directory.
fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_static_dir_holds_landing_page() {
        let dir = default_static_dir();
        assert!(dir.is_absolute());
        assert!(dir.join("index.html").is_file());
    }
}
