//! Page controller: wires the preference store, loader, engine, and theme
//! toggle to a render surface.
//!
//! All mutation runs on one logical thread; the only suspension point is
//! the locale fetch. Selection is a two-phase operation: `begin_selection`
//! records the choice and hands back a [`PendingSelection`] ticket, and
//! `complete_selection` applies the fetched document. A caller driving
//! fetches concurrently (the UI spawning one per button press) may hold
//! several tickets at once; only the ticket from the newest selection can
//! still apply, so a stale response is discarded before it can touch the
//! surface (latest-wins, guarded by a selection epoch).

use std::time::Duration;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::i18n::{engine, Language, LoadError, LocaleLoader, TranslationDocument};
use crate::page::RenderSurface;
use crate::prefs::{Preference, PreferenceStore};
use crate::theme::Theme;

/// Language-selection state machine.
///
/// `Unselected → Loading → Applied | Fallback`; the last two are stable
/// until the user issues a new selection. A failed default-language load
/// terminates silently, restoring the prior stable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageState {
    Unselected,
    Loading(Language),
    Applied(Language),
    Fallback {
        requested: Language,
        applied: Language,
    },
}

/// User events the page surface forwards to the controller, the explicit
/// counterpart of the original script's DOM listener registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A modal or navbar language button was pressed
    LanguageSelected(String),
    ThemeTogglePressed,
    /// The modal backdrop was clicked (dismisses only once a language
    /// preference exists)
    ModalBackdropClicked,
}

/// Ticket for an in-flight locale load, issued by [`App::begin_selection`]
/// and redeemed by [`App::complete_selection`]. Carries the epoch that
/// decides whether the response is still the newest one.
#[derive(Debug)]
pub struct PendingSelection {
    language: Language,
    epoch: u64,
}

impl PendingSelection {
    /// The language this ticket's fetch should load.
    pub fn language(&self) -> Language {
        self.language
    }
}

pub struct App<S: RenderSurface> {
    store: PreferenceStore,
    loader: LocaleLoader,
    surface: S,
    state: LanguageState,
    /// Last non-`Loading` state, the rollback target for a failed load.
    stable: LanguageState,
    epoch: u64,
}

impl<S: RenderSurface> App<S> {
    pub fn new(config: &Config, surface: S) -> Result<Self> {
        let loader = LocaleLoader::new(
            &config.locale_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        let store = PreferenceStore::open(&config.preferences_file);

        Ok(Self {
            store,
            loader,
            surface,
            state: LanguageState::Unselected,
            stable: LanguageState::Unselected,
            epoch: 0,
        })
    }

    /// Startup flow: apply the persisted theme, then either restore the
    /// persisted language (modal suppressed) or present the selection
    /// modal in the `Unselected` state.
    pub async fn initialize(&mut self) {
        if let Some(theme) = self
            .store
            .get(Preference::Theme)
            .and_then(Theme::from_code)
        {
            self.surface.set_theme(theme);
            self.surface.set_theme_icon(theme.icon_class());
        }

        let saved = self.store.get(Preference::Language).map(str::to_owned);
        match saved.as_deref().map(Language::from_code) {
            Some(Ok(language)) => {
                info!("Restoring persisted language '{}'", language.code());
                self.surface.set_modal_visible(false);
                self.surface.set_active_language(language.code());
                self.load_and_apply(language).await;
            }
            Some(Err(e)) => {
                warn!("Ignoring invalid persisted language: {:#}", e);
                self.surface.set_modal_visible(true);
            }
            None => {
                self.surface.set_modal_visible(true);
            }
        }
    }

    /// Handle a user selection: persist the choice, dismiss the modal,
    /// highlight the matching navbar button, then load and apply inline.
    ///
    /// Convenience wrapper over the two-phase API for callers that await
    /// the fetch themselves.
    pub async fn select_language(&mut self, code: &str) -> Result<()> {
        let pending = self.begin_selection(code)?;
        let result = self.loader.load_with_fallback(pending.language()).await;
        self.complete_selection(pending, result);
        Ok(())
    }

    /// First phase of a selection: persist the choice, dismiss the modal,
    /// highlight the matching navbar button, and enter `Loading`. The
    /// returned ticket names the language the caller should fetch; it
    /// supersedes every ticket issued earlier.
    pub fn begin_selection(&mut self, code: &str) -> Result<PendingSelection> {
        let language = Language::from_code(code)?;

        self.store.set(Preference::Language, language.code());
        self.surface.set_modal_visible(false);
        self.surface.set_active_language(language.code());

        Ok(self.begin_load(language))
    }

    /// Second phase: apply the fetch outcome for `pending`. A ticket that
    /// has been superseded by a newer selection is discarded untouched; a
    /// failed load restores the last stable state.
    pub fn complete_selection(
        &mut self,
        pending: PendingSelection,
        result: Result<(TranslationDocument, Language), LoadError>,
    ) {
        if pending.epoch != self.epoch {
            info!(
                "Discarding stale locale response for '{}'",
                pending.language.code()
            );
            return;
        }

        match result {
            Ok((document, applied)) => {
                engine::apply(&document, applied, &mut self.surface);
                self.state = if applied == pending.language {
                    LanguageState::Applied(applied)
                } else {
                    LanguageState::Fallback {
                        requested: pending.language,
                        applied,
                    }
                };
                self.stable = self.state;
                info!("Locale '{}' applied", applied.code());
            }
            Err(e) => {
                // Total outage: the page keeps its prior content, the
                // failure only goes to the diagnostic channel.
                error!(
                    "Failed to load locale '{}': {}",
                    pending.language.code(),
                    e
                );
                self.state = self.stable;
            }
        }
    }

    fn begin_load(&mut self, language: Language) -> PendingSelection {
        self.epoch += 1;
        self.state = LanguageState::Loading(language);

        PendingSelection {
            language,
            epoch: self.epoch,
        }
    }

    async fn load_and_apply(&mut self, language: Language) {
        let pending = self.begin_load(language);
        let result = self.loader.load_with_fallback(language).await;
        self.complete_selection(pending, result);
    }

    /// Flip the theme, update the surface, persist the new value. An
    /// unset theme attribute counts as light, so the first toggle always
    /// lands on dark.
    pub fn toggle_theme(&mut self) {
        let next = self.surface.theme().unwrap_or(Theme::Light).toggled();

        self.surface.set_theme(next);
        self.surface.set_theme_icon(next.icon_class());
        self.store.set(Preference::Theme, next.as_str());

        info!("Theme switched to {}", next);
    }

    pub async fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::LanguageSelected(code) => self.select_language(&code).await?,
            Event::ThemeTogglePressed => self.toggle_theme(),
            Event::ModalBackdropClicked => {
                if self.store.get(Preference::Language).is_some() {
                    self.surface.set_modal_visible(false);
                }
            }
        }
        Ok(())
    }

    pub fn state(&self) -> LanguageState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Controller flows run against a wiremock locale server in
    // tests/integration_tests.rs; here we only pin down the plain enums.

    #[test]
    fn test_language_state_equality() {
        assert_eq!(LanguageState::Unselected, LanguageState::Unselected);
        assert_eq!(
            LanguageState::Applied(Language::ENGLISH),
            LanguageState::Applied(Language::ENGLISH)
        );
        assert_ne!(
            LanguageState::Applied(Language::ENGLISH),
            LanguageState::Loading(Language::ENGLISH)
        );
    }

    #[test]
    fn test_fallback_state_carries_both_languages() {
        let state = LanguageState::Fallback {
            requested: Language::ENGLISH,
            applied: Language::TURKISH,
        };
        match state {
            LanguageState::Fallback { requested, applied } => {
                assert_eq!(requested.code(), "en");
                assert_eq!(applied.code(), "tr");
            }
            _ => panic!("Expected fallback state"),
        }
    }

    #[test]
    fn test_event_equality() {
        assert_eq!(
            Event::LanguageSelected("en".to_string()),
            Event::LanguageSelected("en".to_string())
        );
        assert_ne!(
            Event::LanguageSelected("en".to_string()),
            Event::ThemeTogglePressed
        );
    }
}
