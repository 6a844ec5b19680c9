//! Locale completeness checker.
//!
//! Fetches every enabled language's document and reports keys that are
//! missing, extra, or empty relative to the default-language document.
//! Exits nonzero when any locale is missing keys.
//!
//! Usage:
//!   cargo run --bin check-locales
//!
//! Required environment variables:
//! - LOCALE_BASE_URL

use std::time::Duration;

use anyhow::{Context, Result};

use portfolio_i18n::config::Config;
use portfolio_i18n::i18n::{Language, LanguageRegistry, LocaleChecker, LocaleLoader};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let loader = LocaleLoader::new(
        &config.locale_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    let default = Language::default_language();
    let reference = loader
        .load(default)
        .await
        .with_context(|| format!("Failed to load default locale '{}'", default.code()))?;

    println!(
        "Reference: '{}' with {} keys",
        default.code(),
        reference.keys().len()
    );

    let mut incomplete = false;

    for lang_config in LanguageRegistry::get().list_enabled() {
        if lang_config.is_default {
            continue;
        }

        let language = Language::from_code(lang_config.code)?;
        let document = loader
            .load(language)
            .await
            .with_context(|| format!("Failed to load locale '{}'", language.code()))?;

        let report = LocaleChecker::compare(&reference, &document);

        println!();
        println!("Locale '{}' ({}):", language.code(), language.name());

        if report.is_clean() {
            println!("  complete");
            continue;
        }

        for key in &report.missing {
            println!("  missing: {key}");
        }
        for key in &report.extra {
            println!("  extra:   {key}");
        }
        for key in &report.empty {
            println!("  empty:   {key}");
        }

        if report.has_missing() {
            incomplete = true;
        }
    }

    if incomplete {
        std::process::exit(1);
    }

    Ok(())
}
