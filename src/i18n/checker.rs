//! Locale completeness checking.
//!
//! Compares a candidate locale document against the default-language
//! document. Missing keys are the real problem (those elements silently
//! keep their prior content); extra and empty keys are worth a look but
//! harmless at runtime.

use std::collections::BTreeSet;

use crate::i18n::TranslationDocument;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleReport {
    /// Keys present in the reference document but absent here
    pub missing: Vec<String>,

    /// Keys present here but not in the reference document
    pub extra: Vec<String>,

    /// Keys whose value is empty or whitespace-only
    pub empty: Vec<String>,
}

impl LocaleReport {
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.extra.is_empty() || !self.empty.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_missing() && !self.has_warnings()
    }
}

pub struct LocaleChecker;

impl LocaleChecker {
    /// Compare `candidate` against the `reference` (default-language)
    /// document, key set by key set.
    pub fn compare(reference: &TranslationDocument, candidate: &TranslationDocument) -> LocaleReport {
        let reference_keys: BTreeSet<String> = reference.keys();
        let candidate_keys: BTreeSet<String> = candidate.keys();

        let missing = reference_keys
            .difference(&candidate_keys)
            .cloned()
            .collect();

        let extra = candidate_keys
            .difference(&reference_keys)
            .cloned()
            .collect();

        let empty = candidate_keys
            .iter()
            .filter(|key| {
                candidate
                    .resolve(key)
                    .map(|value| value.trim().is_empty())
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        LocaleReport {
            missing,
            extra,
            empty,
        }
    }
}
