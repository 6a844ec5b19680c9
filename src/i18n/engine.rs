//! Applies a translation document to a render surface.

use tracing::debug;

use crate::i18n::document::{is_markup, TranslationDocument};
use crate::i18n::metrics::LocaleMetrics;
use crate::i18n::Language;
use crate::page::RenderSurface;

/// Re-render every bound element from `document`.
///
/// Keys that resolve replace the element content, as raw markup when the
/// value carries the markup delimiter and as plain text otherwise. Keys
/// that do not resolve leave the prior content untouched: no placeholder,
/// no error. An empty translation reads as absent, so a half-filled locale
/// never blanks an element. The document-level language attribute is
/// updated last.
///
/// Re-applying the same document is idempotent.
pub fn apply<S: RenderSurface + ?Sized>(
    document: &TranslationDocument,
    language: Language,
    surface: &mut S,
) {
    let mut updated = 0usize;
    let mut skipped = 0usize;

    for key in surface.bound_keys() {
        match document.resolve(&key).filter(|value| !value.is_empty()) {
            Some(value) if is_markup(value) => {
                surface.set_markup(&key, value);
                updated += 1;
            }
            Some(value) => {
                surface.set_text(&key, value);
                updated += 1;
            }
            None => {
                debug!("No translation for key '{}', leaving content as-is", key);
                skipped += 1;
            }
        }
    }

    LocaleMetrics::global().record_applied(updated, skipped);
    surface.set_language(language.code());

    debug!(
        "Applied locale '{}': {} elements updated, {} keys skipped",
        language.code(),
        updated,
        skipped
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Content, PageModel};
    use serde_json::json;

    fn document(value: serde_json::Value) -> TranslationDocument {
        TranslationDocument::new(value)
    }

    fn page() -> PageModel {
        let mut page = PageModel::new();
        page.push_bound("nav.home", "initial home");
        page.push_bound("hero.title", "initial title");
        page.push_bound("missing.key", "prior content");
        page
    }

    #[test]
    fn test_apply_updates_resolving_keys_only() {
        let mut page = page();
        let doc = document(json!({
            "nav": {"home": "Anasayfa"},
            "hero": {"title": "Merhaba"}
        }));

        apply(&doc, Language::TURKISH, &mut page);

        assert_eq!(
            page.contents_of("nav.home"),
            vec![&Content::Text("Anasayfa".to_string())]
        );
        assert_eq!(
            page.contents_of("hero.title"),
            vec![&Content::Text("Merhaba".to_string())]
        );
        // Absent resolution: prior content untouched
        assert_eq!(
            page.contents_of("missing.key"),
            vec![&Content::Text("prior content".to_string())]
        );
    }

    #[test]
    fn test_apply_empty_value_keeps_prior_content() {
        let mut page = PageModel::new();
        page.push_bound("nav.home", "prior home");
        page.push_bound("hero.title", "prior title");

        let doc = document(json!({
            "nav": {"home": ""},
            "hero": {"title": "Merhaba"}
        }));

        apply(&doc, Language::TURKISH, &mut page);

        assert_eq!(
            page.contents_of("nav.home"),
            vec![&Content::Text("prior home".to_string())]
        );
        assert_eq!(
            page.contents_of("hero.title"),
            vec![&Content::Text("Merhaba".to_string())]
        );
    }

    #[test]
    fn test_apply_markup_branch() {
        let mut page = PageModel::new();
        page.push_bound("hero.title", "x");
        page.push_bound("hero.subtitle", "y");

        let doc = document(json!({
            "hero": {
                "title": "<b>hi</b>",
                "subtitle": "hi"
            }
        }));

        apply(&doc, Language::ENGLISH, &mut page);

        assert_eq!(
            page.contents_of("hero.title"),
            vec![&Content::Markup("<b>hi</b>".to_string())]
        );
        assert_eq!(
            page.contents_of("hero.subtitle"),
            vec![&Content::Text("hi".to_string())]
        );
    }

    #[test]
    fn test_apply_sets_language_attribute() {
        let mut page = PageModel::new();
        page.push_bound("a", "x");

        apply(&document(json!({"a": "b"})), Language::ENGLISH, &mut page);
        assert_eq!(page.language(), Some("en"));

        apply(&document(json!({"a": "c"})), Language::TURKISH, &mut page);
        assert_eq!(page.language(), Some("tr"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut page = page();
        let doc = document(json!({
            "nav": {"home": "Home"},
            "hero": {"title": "<i>Hi</i>"}
        }));

        apply(&doc, Language::ENGLISH, &mut page);
        let first: Vec<_> = page.elements().to_vec();

        apply(&doc, Language::ENGLISH, &mut page);
        assert_eq!(page.elements(), first.as_slice());
    }

    #[test]
    fn test_apply_shared_key_updates_every_element() {
        let mut page = PageModel::new();
        page.push_bound("footer.note", "a");
        page.push_bound("footer.note", "b");

        apply(
            &document(json!({"footer": {"note": "shared"}})),
            Language::ENGLISH,
            &mut page,
        );

        let contents = page.contents_of("footer.note");
        assert_eq!(contents.len(), 2);
        assert!(contents
            .iter()
            .all(|c| **c == Content::Text("shared".to_string())));
    }

    #[test]
    fn test_apply_empty_document_touches_nothing_but_language() {
        let mut page = page();
        let before: Vec<_> = page.elements().to_vec();

        apply(&document(json!({})), Language::TURKISH, &mut page);

        assert_eq!(page.elements(), before.as_slice());
        assert_eq!(page.language(), Some("tr"));
    }
}
