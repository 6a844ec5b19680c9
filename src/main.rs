//! Demo binary: runs the portfolio startup flow against an in-memory page.
//!
//! Required environment variables:
//! - LOCALE_BASE_URL (locale documents at {base}/locales/{code}.json)
//!
//! Optional:
//! - PREFERENCES_FILE (defaults to preferences.json)
//! - REQUEST_TIMEOUT_SECS (defaults to 10)

use anyhow::Result;
use tracing::info;

use portfolio_i18n::app::App;
use portfolio_i18n::config::Config;
use portfolio_i18n::i18n::{Language, LocaleMetrics};
use portfolio_i18n::page::{Content, PageModel};

/// The bound elements of the portfolio page, keyed like the real markup.
fn build_page() -> PageModel {
    let mut page = PageModel::new();
    page.push_bound("nav.home", "Home");
    page.push_bound("nav.about", "About");
    page.push_bound("nav.skills", "Skills");
    page.push_bound("nav.projects", "Projects");
    page.push_bound("nav.contact", "Contact");
    page.push_bound("hero.title", "Hi!");
    page.push_bound("hero.subtitle", "Welcome to my portfolio");
    page.push_bound("about.description", "");
    page.push_bound("contact.email_label", "Email");
    page.push_static("© Nihat Tekiner");
    page
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_i18n=info".parse()?),
        )
        .init();

    info!("Starting portfolio localization demo");

    let config = Config::from_env()?;
    let mut app = App::new(&config, build_page())?;

    app.initialize().await;

    // No persisted language yet: the modal is up, so simulate the user
    // picking the default language.
    if app.surface().modal_visible() {
        let default = Language::default_language();
        info!(
            "No persisted language, selecting '{}' from the modal",
            default.code()
        );
        app.select_language(default.code()).await?;
    }

    println!("state: {:?}", app.state());
    println!(
        "language attribute: {}",
        app.surface().language().unwrap_or("(unset)")
    );
    println!();

    for element in app.surface().elements() {
        match (&element.key, &element.content) {
            (Some(key), Content::Text(text)) => println!("  [{key}] {text}"),
            (Some(key), Content::Markup(markup)) => println!("  [{key}] (markup) {markup}"),
            (None, Content::Text(text)) => println!("  [-] {text}"),
            (None, Content::Markup(markup)) => println!("  [-] (markup) {markup}"),
        }
    }

    println!();
    println!(
        "metrics: {}",
        serde_json::to_string_pretty(&LocaleMetrics::global().report())?
    );

    Ok(())
}
