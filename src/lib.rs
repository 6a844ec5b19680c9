//! Localization and preference core for a portfolio page front-end.
//!
//! The crate models the reusable part of a single-page portfolio script:
//! a preference store for the two persisted user choices (language, theme),
//! a translation engine that fetches JSON locale documents over HTTP and
//! substitutes them into a render surface, and the controller state machine
//! that drives language selection and theme toggling.
//!
//! The page itself is abstracted behind [`page::RenderSurface`]; the crate
//! ships an in-memory [`page::PageModel`] used by the demo binary and tests.

pub mod app;
pub mod config;
pub mod i18n;
pub mod page;
pub mod prefs;
pub mod theme;
