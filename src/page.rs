//! Render surface contract and an in-memory page model.
//!
//! The engine never touches a global document object: the page is handed
//! in as a [`RenderSurface`]. The trait only requires what the core needs:
//! enumerating bound elements, rewriting their content, and a handful of
//! attributes (the document language, the theme and its toggle icon, the
//! language-selection modal, and the active-language button highlight).

use crate::theme::Theme;

/// Content of a single element. Markup is injected raw; translations are
/// author-controlled, so the trust boundary sits at the locale source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Markup(String),
}

pub trait RenderSurface {
    /// Binding keys of the elements currently in the tree, deduplicated,
    /// in document order. Multiple elements may share a key.
    fn bound_keys(&self) -> Vec<String>;

    /// Replace the content of every element bound to `key` with plain text.
    fn set_text(&mut self, key: &str, value: &str);

    /// Replace the content of every element bound to `key` with raw markup.
    fn set_markup(&mut self, key: &str, value: &str);

    /// Set the document-level language attribute.
    fn set_language(&mut self, code: &str);

    /// Current theme attribute, if one has been set.
    fn theme(&self) -> Option<Theme>;

    fn set_theme(&mut self, theme: Theme);

    /// Icon class on the theme toggle control.
    fn set_theme_icon(&mut self, icon_class: &str);

    /// Show or hide the language-selection modal.
    fn set_modal_visible(&mut self, visible: bool);

    /// Highlight the navbar language button for `code` (and only it).
    fn set_active_language(&mut self, code: &str);
}

/// One element of the in-memory page: an optional binding key plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub key: Option<String>,
    pub content: Content,
}

/// In-memory [`RenderSurface`] used by the demo binary and the tests.
#[derive(Debug, Default)]
pub struct PageModel {
    elements: Vec<Element>,
    language: Option<String>,
    theme: Option<Theme>,
    theme_icon: Option<String>,
    modal_visible: bool,
    active_language: Option<String>,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element bound to a translation key, with its initial content.
    pub fn push_bound(&mut self, key: &str, initial: &str) {
        self.elements.push(Element {
            key: Some(key.to_string()),
            content: Content::Text(initial.to_string()),
        });
    }

    /// Add an untagged element; it is never rewritten by the engine.
    pub fn push_static(&mut self, text: &str) {
        self.elements.push(Element {
            key: None,
            content: Content::Text(text.to_string()),
        });
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Contents of every element bound to `key`, in document order.
    pub fn contents_of(&self, key: &str) -> Vec<&Content> {
        self.elements
            .iter()
            .filter(|e| e.key.as_deref() == Some(key))
            .map(|e| &e.content)
            .collect()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn theme_icon(&self) -> Option<&str> {
        self.theme_icon.as_deref()
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn active_language(&self) -> Option<&str> {
        self.active_language.as_deref()
    }
}

impl RenderSurface for PageModel {
    fn bound_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for element in &self.elements {
            if let Some(key) = &element.key {
                if !keys.contains(key) {
                    keys.push(key.clone());
                }
            }
        }
        keys
    }

    fn set_text(&mut self, key: &str, value: &str) {
        for element in &mut self.elements {
            if element.key.as_deref() == Some(key) {
                element.content = Content::Text(value.to_string());
            }
        }
    }

    fn set_markup(&mut self, key: &str, value: &str) {
        for element in &mut self.elements {
            if element.key.as_deref() == Some(key) {
                element.content = Content::Markup(value.to_string());
            }
        }
    }

    fn set_language(&mut self, code: &str) {
        self.language = Some(code.to_string());
    }

    fn theme(&self) -> Option<Theme> {
        self.theme
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn set_theme_icon(&mut self, icon_class: &str) {
        self.theme_icon = Some(icon_class.to_string());
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }

    fn set_active_language(&mut self, code: &str) {
        self.active_language = Some(code.to_string());
    }
}
