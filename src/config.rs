use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the locale documents are served from
    /// (documents live at `{base}/locales/{code}.json`)
    pub locale_base_url: String,

    /// File backing the preference store
    pub preferences_file: String,

    /// Timeout for locale fetches, in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            locale_base_url: std::env::var("LOCALE_BASE_URL")
                .context("LOCALE_BASE_URL not set")?,

            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| "preferences.json".to_string()),

            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}
