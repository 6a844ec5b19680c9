//! Language registry: single source of truth for the supported languages.
//!
//! Initialized once behind a `OnceLock` and immutable afterwards. The
//! portfolio ships Turkish (the default/fallback language) and English.

use std::sync::OnceLock;

/// Metadata for one supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "tr", "en")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language (shown on the selection buttons)
    pub native_name: &'static str,

    /// Whether this is the default language, the target of the one-level
    /// fallback chain (exactly one should be true)
    pub is_default: bool,

    /// Whether this language is selectable
    pub enabled: bool,
}

pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// The default language configuration.
    ///
    /// # Panics
    /// Panics if zero or multiple default languages are configured; that
    /// is a build-time configuration error, not a runtime condition.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Whether `code` names a supported, enabled language.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

fn supported_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "tr",
            name: "Turkish",
            native_name: "Türkçe",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
        },
    ]
}
