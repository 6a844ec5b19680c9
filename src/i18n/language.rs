//! Validated language type.
//!
//! A `Language` can only be constructed for a code the registry knows and
//! has enabled, so the rest of the crate never has to re-check codes.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
}

impl Language {
    pub const TURKISH: Language = Language { code: "tr" };
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is supported and enabled
    /// * `Err` if the code is unknown or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // static str owned by the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The designated default language, the end of the fallback chain.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry configuration for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot
    /// happen for a properly constructed `Language`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this is the fallback target.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
