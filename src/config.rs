use anyhow::{bail, Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Language
    pub default_language: Option<String>,
    pub preference_file: PathBuf,

    // Survey backend
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub api_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_base_url = non_empty("API_BASE_URL")
            .unwrap_or_else(|| "http://localhost:3000/api".to_string())
            .trim_end_matches('/')
            .to_string();
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            bail!("API_BASE_URL must be an http(s) URL, got '{}'", api_base_url);
        }

        let api_timeout_secs = match non_empty("API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("API_TIMEOUT_SECS is not a number: '{}'", raw))?,
            None => 30,
        };

        Ok(Self {
            // Language
            default_language: non_empty("DEFAULT_LANGUAGE"),
            preference_file: non_empty("LANGUAGE_PREFERENCE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".praktijkepd/preferences.json")),

            // Survey backend
            api_base_url,
            api_token: non_empty("API_TOKEN"),
            api_timeout_secs,
        })
    }
}
