//! Locale document loader.
//!
//! Documents are addressed as `{base_url}/locales/{code}.json`. Loading is
//! the only fallible, asynchronous operation in the crate; every failure is
//! a [`LoadError`]. The fallback chain has depth one: a failed load of a
//! non-default language retries exactly once with the default language, and
//! a failed default load propagates to the caller, which only logs it.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

use crate::i18n::metrics::LocaleMetrics;
use crate::i18n::{Language, TranslationDocument};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("locale request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("locale server returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("locale document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub struct LocaleLoader {
    client: reqwest::Client,
    base_url: String,
}

impl LocaleLoader {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn locale_url(&self, code: &str) -> String {
        format!(
            "{}/locales/{}.json",
            self.base_url.trim_end_matches('/'),
            code
        )
    }

    /// Fetch and parse the locale document for one language.
    pub async fn load(&self, language: Language) -> Result<TranslationDocument, LoadError> {
        LocaleMetrics::global().record_load();
        match self.fetch(language).await {
            Ok(document) => Ok(document),
            Err(e) => {
                LocaleMetrics::global().record_load_failure();
                Err(e)
            }
        }
    }

    async fn fetch(&self, language: Language) -> Result<TranslationDocument, LoadError> {
        let url = self.locale_url(language.code());
        debug!("Fetching locale document from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(LoadError::Status {
                status: response.status(),
                url,
            });
        }

        let raw = response.text().await?;
        Ok(raw.parse()?)
    }

    /// Load with the one-level fallback chain.
    ///
    /// Returns the document together with the language it actually belongs
    /// to, so the caller can set the page language attribute correctly when
    /// the fallback was taken.
    pub async fn load_with_fallback(
        &self,
        language: Language,
    ) -> Result<(TranslationDocument, Language), LoadError> {
        match self.load(language).await {
            Ok(document) => Ok((document, language)),
            Err(e) if !language.is_default() => {
                let default = Language::default_language();
                warn!(
                    "Failed to load locale '{}' ({}), falling back to '{}'",
                    language.code(),
                    e,
                    default.code()
                );
                LocaleMetrics::global().record_fallback();

                let document = self.load(default).await?;
                Ok((document, default))
            }
            Err(e) => Err(e),
        }
    }
}
