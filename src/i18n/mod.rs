//! Internationalization (i18n) module.
//!
//! Everything language-related lives here: the registry of supported
//! languages, the validated `Language` type, the locale document model
//! with dot-path resolution, the HTTP loader with its one-level default
//! fallback, the engine that applies a document to a render surface,
//! locale completeness checking, and load/apply metrics.
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_i18n::i18n::{Language, LocaleLoader};
//!
//! let loader = LocaleLoader::new("http://localhost:8000", timeout)?;
//! let (document, applied) = loader.load_with_fallback(Language::ENGLISH).await?;
//! ```

mod checker;
mod document;
pub mod engine;
mod language;
mod loader;
mod metrics;
mod registry;

pub use checker::{LocaleChecker, LocaleReport};
pub use document::{is_markup, TranslationDocument};
pub use language::Language;
pub use loader::{LoadError, LocaleLoader};
pub use metrics::{LocaleMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
